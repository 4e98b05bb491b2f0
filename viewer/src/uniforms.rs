use std::io::{Read, Write};
use glam::Mat4;
use serde::{Serialize, Deserialize};
use viewer_shared::ViewConst;
use crate::Result;

pub const PROJECTION: &str = "projection";
pub const VIEW: &str = "view";
pub const NAMES: [&str; 2] = [PROJECTION, VIEW];

/// Camera matrices shared by every vertex of a draw call, addressable by
/// their uniform names.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Uniforms {
  pub projection: Mat4,
  pub view: Mat4,
}

impl Default for Uniforms {
  fn default() -> Self {
    Self::new()
  }
}

impl Uniforms {
  pub fn new() -> Self {
    Self {
      projection: Mat4::IDENTITY,
      view: Mat4::IDENTITY,
    }
  }

  pub fn projection(mut self, projection: Mat4) -> Self {
    self.projection = projection;
    self
  }

  pub fn view(mut self, view: Mat4) -> Self {
    self.view = view;
    self
  }

  pub fn set(&mut self, name: &str, value: Mat4) -> Result {
    match name {
      PROJECTION => self.projection = value,
      VIEW => self.view = value,
      _ => return Err(format!("unknown uniform '{}'", name).into()),
    }
    Ok(())
  }

  pub fn get(&self, name: &str) -> Option<Mat4> {
    match name {
      PROJECTION => Some(self.projection),
      VIEW => Some(self.view),
      _ => None,
    }
  }

  pub fn is_finite(&self) -> bool {
    self.projection.is_finite() && self.view.is_finite()
  }

  /// Warns about NaN/Inf entries. Values are left as they are; a bad matrix
  /// still goes through the stage and produces degenerate geometry.
  pub fn validate(&self) -> bool {
    let mut ok = true;
    for name in NAMES {
      if self.get(name).is_some_and(|m| !m.is_finite()) {
        log::warn!("uniform '{}' contains non-finite values", name);
        ok = false;
      }
    }
    ok
  }

  pub fn as_const(&self) -> ViewConst {
    ViewConst::new(self.projection, self.view)
  }

  /// Uniform buffer contents, laid out as `ViewConst`.
  pub fn as_bytes(&self) -> Vec<u8> {
    bytemuck::bytes_of(&self.as_const()).to_vec()
  }

  pub fn load<R: Read>(reader: R) -> Result<Self> {
    Ok(serde_json::from_reader(reader)?)
  }

  pub fn save<W: Write>(&self, writer: W) -> Result {
    serde_json::to_writer_pretty(writer, self)?;
    Ok(())
  }
}
