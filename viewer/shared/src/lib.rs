#![cfg_attr(not(test), no_std)]
//! Data shared between the `debug_v` vertex shader and the host.
//!
//! Everything here compiles for `spirv-unknown-*` as well as for the host, so
//! the CPU path and the GPU path run the exact same arithmetic.
use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4, Mat4};

/// Per-vertex input, bound at vertex buffer slot 0.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
  pub pos: Vec4,
}

/// Uniform block holding the camera matrices for one draw call.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewConst {
  pub projection: Mat4,
  pub view: Mat4,
}

impl ViewConst {
  pub const IDENTITY: Self = Self {
    projection: Mat4::IDENTITY,
    view: Mat4::IDENTITY,
  };

  pub fn new(projection: Mat4, view: Mat4) -> Self {
    Self { projection, view }
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexOut {
  pub clip_pos: Vec4,
  pub color: Vec3,
}

impl VertexOut {
  pub const ZERO: Self = Self {
    clip_pos: Vec4::ZERO,
    color: Vec3::ZERO,
  };
}

/// Object space to clip space. The perspective divide happens downstream.
#[inline(always)]
pub fn clip_position(pos: Vec4, consts: &ViewConst) -> Vec4 {
  consts.projection * (consts.view * pos)
}

/// Maps `[-1, 1]` model-space coordinates to `[0, 1]` rgb.
#[inline(always)]
pub fn debug_color(pos: Vec4) -> Vec3 {
  pos.truncate() * 0.5 + 0.5
}

#[inline(always)]
pub fn transform(pos: Vec4, consts: &ViewConst) -> VertexOut {
  VertexOut {
    clip_pos: clip_position(pos, consts),
    color: debug_color(pos),
  }
}
