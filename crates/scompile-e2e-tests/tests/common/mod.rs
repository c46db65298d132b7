use scompile_backend_core::Backend;

/// Parse HLSL source and generate output with the given backend.
#[allow(dead_code)]
pub fn generate_with(source: &str, backend: &dyn Backend) -> String {
    let ir = scompile_parser::parse(source).expect("HLSL parse failed");
    backend.generate(&ir).expect("generation failed")
}

/// Full pipeline: HLSL in, GLSL out.
#[allow(dead_code)]
pub fn translate(source: &str) -> String {
    scompile_backend_glsl::translate(source).expect("translation failed")
}
