#![warn(missing_docs)]
//! GLSL dialect generator for scompile.
//!
//! Rewrites HLSL-style source into GLSL-style source by mapping known type
//! names, resource-binding keywords, and intrinsic names to their GLSL
//! equivalents. Translation is lexical: a single left-to-right pass over
//! the scanned token stream replaces whole identifiers that appear in the
//! fixed [`TOKEN_MAP`] and copies everything else through unchanged. No
//! grammar-level rewriting happens, so the output is not guaranteed to be
//! valid GLSL.

mod lex;

use scompile_backend_core::{Backend, BackendError};
use scompile_ir::ShaderIr;
use scompile_parser::ParseError;

use crate::lex::TokenKind;

/// The fixed HLSL→GLSL token mapping table.
///
/// Keys are unique and matched against whole identifiers only. Because the
/// whole table is consulted in one simultaneous scan, no entry ever sees
/// text produced by another entry; the table must still be collision-free
/// (no target equals any source key) so that translating twice is a no-op.
///
/// `mul` maps to the empty string. This elides the intrinsic name but
/// leaves its parenthesized argument list behind; turning `mul(a, b)` into
/// `a * b` would need a grammar-level rewrite, which this generator does
/// not perform. Known limitation.
pub const TOKEN_MAP: &[(&str, &str)] = &[
    ("float4", "vec4"),
    ("float3", "vec3"),
    ("float2", "vec2"),
    ("Texture2D", "sampler2D"),
    ("SamplerState", "sampler2D"),
    ("mul", ""),
];

fn mapped(ident: &str) -> Option<&'static str> {
    TOKEN_MAP
        .iter()
        .find(|(hlsl, _)| *hlsl == ident)
        .map(|&(_, glsl)| glsl)
}

/// Applies the token mapping table to the IR's source in a single scan.
fn substitute(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for token in lex::tokens(source) {
        match token.kind {
            TokenKind::Ident => out.push_str(mapped(token.text).unwrap_or(token.text)),
            TokenKind::Opaque => out.push_str(token.text),
        }
    }
    out
}

/// GLSL backend for the registry.
#[derive(Debug)]
pub struct GlslBackend;

impl Backend for GlslBackend {
    fn name(&self) -> &str {
        "GLSL"
    }

    fn targets(&self) -> &[&str] {
        &["glsl"]
    }

    fn file_extension(&self) -> &str {
        "glsl"
    }

    fn generate(&self, ir: &ShaderIr) -> Result<String, BackendError> {
        Ok(substitute(&ir.source))
    }
}

/// Translates HLSL source to GLSL source.
///
/// Composes the front-end and the GLSL generator; pure in-memory
/// transformation, no I/O. Both stages are currently total, so this
/// returns `Ok` for every input; the `Result` is the seam through which a
/// grammar-aware front-end would report syntax faults.
pub fn translate(source: &str) -> Result<String, ParseError> {
    let ir = scompile_parser::parse(source)?;
    Ok(substitute(&ir.source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_types_resources_and_intrinsics() {
        let out =
            translate("Texture2D tex; SamplerState s; float4 c = mul(m, float4(1,0,0,1));")
                .unwrap();
        assert_eq!(
            out,
            "sampler2D tex; sampler2D s; vec4 c = (m, vec4(1,0,0,1));"
        );
    }

    #[test]
    fn identity_when_no_token_matches() {
        let src = "void main() { gl_FragColor = texture(tex, uv); }";
        assert_eq!(translate(src).unwrap(), src);
    }

    #[test]
    fn identity_on_empty_input() {
        assert_eq!(translate("").unwrap(), "");
    }

    #[test]
    fn longer_identifiers_are_not_corrupted() {
        // `float4` is a prefix of `float4x4`; whole-token matching must
        // leave the longer identifier alone.
        assert_eq!(translate("float4x4 m;").unwrap(), "float4x4 m;");
        assert_eq!(translate("mulberry(x);").unwrap(), "mulberry(x);");
        assert_eq!(translate("my_float4;").unwrap(), "my_float4;");
    }

    #[test]
    fn comments_and_strings_are_untouched() {
        let src = "// float4 stays\n/* mul too */\nconst char* s = \"float4\";";
        assert_eq!(translate(src).unwrap(), src);
    }

    #[test]
    fn mul_elision_keeps_argument_list() {
        assert_eq!(translate("mul(m, v)").unwrap(), "(m, v)");
    }

    #[test]
    fn table_is_collision_free() {
        // No target token may equal any source token, otherwise a second
        // pass (or, in a sequential design, a later table entry) would
        // rewrite already-translated text.
        for (_, glsl) in TOKEN_MAP {
            assert!(
                TOKEN_MAP.iter().all(|(hlsl, _)| hlsl != glsl),
                "target {glsl:?} collides with a source token"
            );
        }
    }

    #[test]
    fn table_keys_are_unique() {
        for (i, (a, _)) in TOKEN_MAP.iter().enumerate() {
            assert!(
                TOKEN_MAP.iter().skip(i + 1).all(|(b, _)| a != b),
                "duplicate source token {a:?}"
            );
        }
    }

    #[test]
    fn translation_is_idempotent() {
        let src = "Texture2D t; float4 c = mul(a, b); float2 uv;";
        let once = translate(src).unwrap();
        let twice = translate(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn backend_metadata() {
        let backend = GlslBackend;
        assert_eq!(backend.name(), "GLSL");
        assert!(backend.targets().contains(&"glsl"));
        assert_eq!(backend.file_extension(), "glsl");
    }

    #[test]
    fn backend_generate_matches_translate() {
        let src = "float3 n = normalize(v);";
        let ir = scompile_parser::parse(src).unwrap();
        let out = GlslBackend.generate(&ir).unwrap();
        assert_eq!(out, translate(src).unwrap());
        assert_eq!(out, "vec3 n = normalize(v);");
    }
}
