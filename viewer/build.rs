fn main() -> Result<(), Box<dyn std::error::Error>> {
  #[cfg(feature = "spirv")]
  {
    use spirv_builder::{SpirvBuilder, MetadataPrintout};
    let out = SpirvBuilder::new("shaders", "spirv-unknown-spv1.5")
      .print_metadata(MetadataPrintout::DependencyOnly)
      .build()?;
    println!(
      "cargo:rustc-env=VIEWER_SHADERS={}",
      out.module.unwrap_single().display()
    );
  }
  Ok(())
}
