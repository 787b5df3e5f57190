//! WGSL sources, one constant per stage so each stage is compiled and
//! validated on its own before the pipeline is linked together.

/// Entry point names shared by both programs.
pub const VS_ENTRY: &str = "vs_main";
pub const FS_ENTRY: &str = "fs_main";

/// Vertex stage for the lit still-life pass.
pub const LIT_VERTEX: &str = r#"
struct SceneUniforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
    object_color: vec4<f32>,
    light_color: vec4<f32>,
    light_pos: vec4<f32>,
    view_pos: vec4<f32>,
    uv_scale: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> scene: SceneUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    let world = scene.model * vec4<f32>(in.position, 1.0);

    var out: VertexOutput;
    out.clip_position = scene.projection * scene.view * world;
    out.world_pos = world.xyz;
    out.world_normal = (scene.model * vec4<f32>(in.normal, 0.0)).xyz;
    out.uv = in.uv;
    return out;
}
"#;

/// Fragment stage for the lit pass: ambient + diffuse + specular Phong
/// terms modulating the sampled texture color.
pub const LIT_FRAGMENT: &str = r#"
struct SceneUniforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
    object_color: vec4<f32>,
    light_color: vec4<f32>,
    light_pos: vec4<f32>,
    view_pos: vec4<f32>,
    uv_scale: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> scene: SceneUniforms;

@group(1) @binding(0)
var t_diffuse: texture_2d<f32>;
@group(1) @binding(1)
var s_diffuse: sampler;

struct FragmentInput {
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@fragment
fn fs_main(in: FragmentInput) -> @location(0) vec4<f32> {
    let ambient_strength = 0.1;
    let specular_intensity = 0.8;
    let highlight_size = 16.0;

    let ambient = ambient_strength * scene.light_color.rgb;

    let norm = normalize(in.world_normal);
    let light_dir = normalize(scene.light_pos.xyz - in.world_pos);
    let impact = max(dot(norm, light_dir), 0.0);
    let diffuse = impact * scene.light_color.rgb;

    let view_dir = normalize(scene.view_pos.xyz - in.world_pos);
    let reflect_dir = reflect(-light_dir, norm);
    let highlight = pow(max(dot(view_dir, reflect_dir), 0.0), highlight_size);
    let specular = specular_intensity * highlight * scene.light_color.rgb;

    let texture_color = textureSample(t_diffuse, s_diffuse, in.uv * scene.uv_scale.xy);
    let phong = (ambient + diffuse + specular) * texture_color.rgb;
    return vec4<f32>(phong, 1.0);
}
"#;

/// Vertex stage for the lamp indicator pass.
pub const LAMP_VERTEX: &str = r#"
struct LampUniforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> lamp: LampUniforms;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return lamp.projection * lamp.view * lamp.model * vec4<f32>(position, 1.0);
}
"#;

/// Fragment stage for the lamp indicator: constant white, no lighting.
pub const LAMP_FRAGMENT: &str = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 1.0, 1.0, 1.0);
}
"#;
