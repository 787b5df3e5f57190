//! Shader program builder: a two-phase compile-then-link state machine.
//!
//! Each stage is parsed and validated on its own with naga; only when both
//! stages compile does linking run, checking entry points and the
//! vertex/fragment interface. Compile and link failures are distinct
//! variants carrying the compiler's diagnostic text, and everything here is
//! checkable without a GPU device.

use crate::shaders::{FS_ENTRY, VS_ENTRY};
use naga::valid::{Capabilities, ValidationFlags, Validator};
use std::fmt;

/// Which stage a compile failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Errors from shader program construction.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("{stage} shader compilation failed: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("shader program link failed: {0}")]
    Link(String),
}

/// A compile- and link-checked pair of stages, ready for wgpu module and
/// pipeline creation.
#[derive(Debug)]
pub struct ValidatedProgram {
    pub vertex: naga::Module,
    pub fragment: naga::Module,
}

/// Parse and validate a single WGSL stage.
pub fn compile_stage(source: &str, stage: ShaderStage) -> Result<naga::Module, ShaderError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| ShaderError::Compile {
        stage,
        log: e.emit_to_string(source),
    })?;

    let mut validator = Validator::new(ValidationFlags::all(), Capabilities::default());
    validator
        .validate(&module)
        .map_err(|e| ShaderError::Compile {
            stage,
            log: e.into_inner().to_string(),
        })?;

    Ok(module)
}

/// Compile both stages, then link them. Fails fast: a compile error in
/// either stage is reported without attempting the link step.
pub fn build_program(vertex_src: &str, fragment_src: &str) -> Result<ValidatedProgram, ShaderError> {
    let vertex = compile_stage(vertex_src, ShaderStage::Vertex)?;
    let fragment = compile_stage(fragment_src, ShaderStage::Fragment)?;
    link(&vertex, &fragment)?;
    Ok(ValidatedProgram { vertex, fragment })
}

/// Entry-point and interface check between two compiled stages.
fn link(vertex: &naga::Module, fragment: &naga::Module) -> Result<(), ShaderError> {
    let vs = entry_point(vertex, VS_ENTRY, naga::ShaderStage::Vertex).ok_or_else(|| {
        ShaderError::Link(format!("vertex entry point `{VS_ENTRY}` not found"))
    })?;
    let fs = entry_point(fragment, FS_ENTRY, naga::ShaderStage::Fragment).ok_or_else(|| {
        ShaderError::Link(format!("fragment entry point `{FS_ENTRY}` not found"))
    })?;

    let mut outputs = Vec::new();
    if let Some(result) = &vs.function.result {
        collect_locations(vertex, result.ty, result.binding.as_ref(), &mut outputs);
    }

    let mut inputs = Vec::new();
    for arg in &fs.function.arguments {
        collect_locations(fragment, arg.ty, arg.binding.as_ref(), &mut inputs);
    }

    for location in inputs {
        if !outputs.contains(&location) {
            return Err(ShaderError::Link(format!(
                "fragment input at location {location} has no matching vertex output"
            )));
        }
    }

    Ok(())
}

fn entry_point<'a>(
    module: &'a naga::Module,
    name: &str,
    stage: naga::ShaderStage,
) -> Option<&'a naga::EntryPoint> {
    module
        .entry_points
        .iter()
        .find(|ep| ep.name == name && ep.stage == stage)
}

/// Gather interstage `@location` bindings from an argument or result, which
/// is either bound directly or a struct of bound members.
fn collect_locations(
    module: &naga::Module,
    ty: naga::Handle<naga::Type>,
    binding: Option<&naga::Binding>,
    out: &mut Vec<u32>,
) {
    if let Some(naga::Binding::Location { location, .. }) = binding {
        out.push(*location);
        return;
    }
    if let naga::TypeInner::Struct { members, .. } = &module.types[ty].inner {
        for member in members {
            if let Some(naga::Binding::Location { location, .. }) = &member.binding {
                out.push(*location);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaders;

    #[test]
    fn shipped_lit_program_links() {
        build_program(shaders::LIT_VERTEX, shaders::LIT_FRAGMENT).unwrap();
    }

    #[test]
    fn shipped_lamp_program_links() {
        build_program(shaders::LAMP_VERTEX, shaders::LAMP_FRAGMENT).unwrap();
    }

    #[test]
    fn invalid_vertex_source_fails_at_compile() {
        let err = build_program("this is not wgsl", shaders::LIT_FRAGMENT).unwrap_err();
        match err {
            ShaderError::Compile { stage, log } => {
                assert_eq!(stage, ShaderStage::Vertex);
                assert!(!log.is_empty());
            }
            ShaderError::Link(_) => panic!("compile failure must precede link"),
        }
    }

    #[test]
    fn invalid_fragment_source_fails_at_compile() {
        let err = build_program(shaders::LAMP_VERTEX, "@fragment fn broken(").unwrap_err();
        assert!(matches!(
            err,
            ShaderError::Compile {
                stage: ShaderStage::Fragment,
                ..
            }
        ));
    }

    #[test]
    fn vertex_error_wins_when_both_stages_are_broken() {
        let err = build_program("garbage", "also garbage").unwrap_err();
        assert!(matches!(
            err,
            ShaderError::Compile {
                stage: ShaderStage::Vertex,
                ..
            }
        ));
    }

    #[test]
    fn missing_entry_point_is_a_link_error() {
        let fragment = r#"
            @fragment
            fn main_fs() -> @location(0) vec4<f32> {
                return vec4<f32>(0.0, 0.0, 0.0, 1.0);
            }
        "#;
        let err = build_program(shaders::LAMP_VERTEX, fragment).unwrap_err();
        match err {
            ShaderError::Link(log) => assert!(log.contains("entry point")),
            other => panic!("expected link error, got {other:?}"),
        }
    }

    #[test]
    fn unmatched_fragment_input_is_a_link_error() {
        // The lamp vertex stage only emits the builtin position, so a
        // fragment stage wanting a location-0 varying cannot be satisfied.
        let fragment = r#"
            @fragment
            fn fs_main(@location(0) tint: vec3<f32>) -> @location(0) vec4<f32> {
                return vec4<f32>(tint, 1.0);
            }
        "#;
        let err = build_program(shaders::LAMP_VERTEX, fragment).unwrap_err();
        match err {
            ShaderError::Link(log) => assert!(log.contains("location 0")),
            other => panic!("expected link error, got {other:?}"),
        }
    }

    #[test]
    fn semantically_invalid_stage_fails_validation() {
        // Parses, but returns the wrong type from the entry point.
        let vertex = r#"
            @vertex
            fn vs_main() -> @builtin(position) vec4<f32> {
                return 1.0;
            }
        "#;
        let err = compile_stage(vertex, ShaderStage::Vertex).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::Compile {
                stage: ShaderStage::Vertex,
                ..
            }
        ));
    }
}
