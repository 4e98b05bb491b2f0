use glam::Vec4;
use rayon::prelude::*;
use viewer_shared::{Vertex, VertexOut, transform};
use crate::Result;
use crate::uniforms::Uniforms;

/// CPU dispatch of `debug_v` over a draw call. Every vertex is independent;
/// the matrices are fixed for the lifetime of the stage, so build a new one
/// when they change between frames.
pub struct VertexStage {
  uniforms: Uniforms,
}

impl VertexStage {
  pub fn new(uniforms: Uniforms) -> Self {
    uniforms.validate();
    Self { uniforms }
  }

  pub fn uniforms(&self) -> &Uniforms {
    &self.uniforms
  }

  pub fn run_one(&self, pos: Vec4) -> VertexOut {
    transform(pos, &self.uniforms.as_const())
  }

  pub fn run(&self, positions: &[Vec4]) -> Vec<VertexOut> {
    log::debug!("transforming {} vertices", positions.len());
    let consts = self.uniforms.as_const();
    positions
      .par_iter()
      .map(|&pos| transform(pos, &consts))
      .collect()
  }

  pub fn run_vertices(&self, verts: &[Vertex]) -> Vec<VertexOut> {
    log::debug!("transforming {} vertices", verts.len());
    let consts = self.uniforms.as_const();
    verts
      .par_iter()
      .map(|v| transform(v.pos, &consts))
      .collect()
  }

  pub fn run_into(&self, positions: &[Vec4], out: &mut [VertexOut]) -> Result {
    if positions.len() != out.len() {
      return Err(
        format!(
          "output holds {} vertices, input has {}",
          out.len(),
          positions.len()
        )
        .into(),
      );
    }
    let consts = self.uniforms.as_const();
    out
      .par_iter_mut()
      .zip(positions)
      .for_each(|(out, &pos)| *out = transform(pos, &consts));
    Ok(())
  }
}
