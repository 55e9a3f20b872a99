use crate::coords::{Rect, Viewport};
use crate::error::{EngineError, EngineResult};
use crate::render::{RenderCtx, RenderTarget, Texture, TextureExtent};

use super::quad::{build_quad, SpriteVertex, QUAD_VERTEX_COUNT};
use super::SpriteSink;

const SHADER_LABEL: &str = "cubix sprite shader";
pub(crate) const SPRITE_SHADER: &str = include_str!("../shaders/sprite.wgsl");

/// Fixed textured-quad pipeline.
///
/// Construction compiles the shader and creates every GPU object the pipeline
/// needs, so an existing `SpritePipeline` is always ready to draw. Drawing goes
/// through [`SpritePipeline::begin`], which hands out a [`SpritePass`].
///
/// There is no batching: every sprite is its own submission. That keeps the
/// single one-quad vertex buffer valid, because `Queue::write_buffer` lands
/// before the next `submit` and each submit consumes exactly one quad.
pub struct SpritePipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    vertex_buffer: wgpu::Buffer,
}

impl SpritePipeline {
    pub fn new(ctx: &RenderCtx<'_>) -> EngineResult<Self> {
        let shader = compile_shader(ctx.device, SHADER_LABEL, SPRITE_SHADER)?;

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("cubix sprite bgl"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("cubix sprite pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("cubix sprite pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[SpriteVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(sprite_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let sampler = ctx.device.create_sampler(&sprite_sampler_descriptor());

        let vertex_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cubix sprite vbo"),
            size: (QUAD_VERTEX_COUNT * std::mem::size_of::<SpriteVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        log::debug!("sprite pipeline ready ({:?})", ctx.surface_format);

        Ok(Self {
            pipeline,
            bind_group_layout,
            sampler,
            vertex_buffer,
        })
    }

    /// Makes this pipeline the active draw configuration for `target`.
    ///
    /// Call at least once per frame before drawing; draws are only possible
    /// through the returned pass.
    pub fn begin<'a>(&'a self, ctx: &RenderCtx<'a>, target: RenderTarget<'a>) -> SpritePass<'a> {
        SpritePass {
            pipeline: self,
            device: ctx.device,
            queue: ctx.queue,
            target,
            draws: 0,
        }
    }
}

/// Active sprite drawing for one frame.
pub struct SpritePass<'a> {
    pipeline: &'a SpritePipeline,
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    target: RenderTarget<'a>,
    draws: u32,
}

impl SpritePass<'_> {
    /// Number of draws submitted through this pass.
    pub fn draw_count(&self) -> u32 {
        self.draws
    }

    /// Draws one textured quad as its own GPU submission.
    ///
    /// `dest` is in backbuffer pixels, `src` in texture pixels (`None` = whole
    /// texture). Zero-sized destinations are valid and rasterize nothing.
    pub fn draw_sprite(&mut self, texture: &Texture, dest: Rect, src: Option<Rect>, viewport: Viewport) {
        let pipeline = self.pipeline;
        log::trace!("sprite `{}` -> {:?}", texture.label(), dest);
        let vertices = build_quad(dest, src, (texture.width(), texture.height()), viewport);

        // Overwrites the previous quad; the last submit already consumed it.
        self.queue
            .write_buffer(&pipeline.vertex_buffer, 0, bytemuck::cast_slice(&vertices));

        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cubix sprite bind group"),
            layout: &pipeline.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(texture.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&pipeline.sampler),
                },
            ],
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("cubix sprite encoder"),
            });

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cubix sprite pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: self.target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_pipeline(&pipeline.pipeline);
            rpass.set_bind_group(0, &bind_group, &[]);
            rpass.set_vertex_buffer(0, pipeline.vertex_buffer.slice(..));
            rpass.draw(0..QUAD_VERTEX_COUNT as u32, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        self.draws += 1;
    }
}

impl SpriteSink<Texture> for SpritePass<'_> {
    fn draw(&mut self, texture: &Texture, dest: Rect, src: Option<Rect>, viewport: Viewport) {
        self.draw_sprite(texture, dest, src, viewport);
    }
}

impl Drop for SpritePass<'_> {
    fn drop(&mut self) {
        log::trace!("sprite pass finished: {} draws", self.draws);
    }
}

/// Straight-alpha "source over" for color; alpha of the source is written through.
pub(crate) fn sprite_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::Zero,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

/// Point sampling with clamped edges, for crisp pixel art.
pub(crate) fn sprite_sampler_descriptor() -> wgpu::SamplerDescriptor<'static> {
    wgpu::SamplerDescriptor {
        label: Some("cubix sprite sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Nearest,
        min_filter: wgpu::FilterMode::Nearest,
        mipmap_filter: wgpu::MipmapFilterMode::Nearest,
        ..Default::default()
    }
}

/// Compiles WGSL into a module, turning validation failures into
/// [`EngineError::ShaderCompilation`] instead of a device error.
pub(crate) fn compile_shader(device: &wgpu::Device, label: &str, source: &str) -> EngineResult<wgpu::ShaderModule> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    let scope_error = pollster::block_on(scope.pop());

    let info = pollster::block_on(shader.get_compilation_info());
    let mut messages: Vec<String> = info
        .messages
        .iter()
        .filter(|m| matches!(m.message_type, wgpu::CompilationMessageType::Error))
        .map(|m| match &m.location {
            Some(loc) => format!("{}:{}: {}", loc.line_number, loc.line_position, m.message),
            None => m.message.clone(),
        })
        .collect();

    if messages.is_empty() {
        if let Some(e) = scope_error {
            messages.push(e.to_string());
        }
    }

    if messages.is_empty() {
        Ok(shader)
    } else {
        log::error!("shader `{label}` failed to compile: {}", messages.join("; "));
        Err(EngineError::ShaderCompilation {
            label: label.to_string(),
            messages,
        })
    }
}
