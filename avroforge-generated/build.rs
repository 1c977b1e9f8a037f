use avroforge_codegen::{LinkOptions, compile_path, emit_file_map, prepare_target};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let target = Path::new("src/generated");

    // Compile the schemas into a module tree using the runtime crate
    let files = compile_path(Path::new("schemas"), &LinkOptions::new().vendor_runtime(false))?;
    prepare_target(target, true)?;
    emit_file_map(&files, target)?;

    println!("cargo:rerun-if-changed=schemas");
    Ok(())
}
