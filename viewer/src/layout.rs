//! How a wgpu host wires the stage up: entry point, vertex buffer layout and
//! the uniform binding for `ViewConst`.
use std::mem;
use bytemuck::Pod;
use viewer_shared::{Vertex, ViewConst};

pub const ENTRY_POINT: &str = "debug_v";
pub const POSITION_LOCATION: u32 = 0;
pub const COLOR_LOCATION: u32 = 0;
pub const UNIFORM_GROUP: u32 = 0;
pub const UNIFORM_BINDING: u32 = 0;

const ATTRIBUTES: [wgpu::VertexAttribute; 1] =
  wgpu::vertex_attr_array![POSITION_LOCATION => Float32x4];

#[cfg(feature = "spirv")]
pub const SHADERS: &[u8] = include_bytes!(env!("VIEWER_SHADERS"));

#[cfg(feature = "spirv")]
pub fn shader_source() -> wgpu::ShaderSource<'static> {
  wgpu::util::make_spirv(SHADERS)
}

pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
  wgpu::VertexBufferLayout {
    array_stride: mem::size_of::<Vertex>() as _,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &ATTRIBUTES,
  }
}

pub fn uniform_layout_entry() -> wgpu::BindGroupLayoutEntry {
  wgpu::BindGroupLayoutEntry {
    binding: UNIFORM_BINDING,
    visibility: wgpu::ShaderStages::VERTEX,
    ty: wgpu::BindingType::Buffer {
      ty: wgpu::BufferBindingType::Uniform,
      has_dynamic_offset: false,
      min_binding_size: wgpu::BufferSize::new(mem::size_of::<ViewConst>() as _),
    },
    count: None,
  }
}

/// Bytes for a vertex buffer upload. Only padding-free `Pod` types qualify.
pub fn cast_slice<T: Pod>(t: &[T]) -> &[u8] {
  bytemuck::cast_slice(t)
}

pub fn cast<T: Pod>(t: &T) -> &[u8] {
  bytemuck::bytes_of(t)
}
