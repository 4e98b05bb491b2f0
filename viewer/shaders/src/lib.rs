#![cfg_attr(target_arch = "spirv", no_std)]
use spirv_std::spirv;
use spirv_std::glam::{Vec4, Vec3};
use viewer_shared::ViewConst;

#[spirv(vertex)]
pub fn debug_v(
  pos: Vec4,
  #[spirv(uniform, descriptor_set = 0, binding = 0)] consts: &ViewConst,
  #[spirv(position)] out_pos: &mut Vec4,
  out_color: &mut Vec3,
) {
  let out = viewer_shared::transform(pos, consts);
  *out_pos = out.clip_pos;
  *out_color = out.color;
}
