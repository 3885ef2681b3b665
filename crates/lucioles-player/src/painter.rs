//! Presents a recorded `DrawList` through egui's painter onto the wgpu surface

use crate::render::RenderContext;
use lucioles_core::{Color, LuciolesError, Result, Vec2};
use lucioles_runtime::{DrawCommand, DrawList, FontId};
use lucioles_swarm::message::MESSAGE_FONT;
use std::path::Path;
use winit::event::WindowEvent;
use winit::window::Window;

/// Size of the unnamed UI font (FPS readout)
const UI_FONT_SIZE: f32 = 20.0;

pub struct Presenter {
    egui_ctx: egui::Context,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    message_font_size: f32,
}

impl Presenter {
    /// `message_font` is a TTF/OTF file for the message; egui's proportional
    /// font is used when it is `None`
    pub fn new(
        window: &Window,
        context: &RenderContext,
        message_font: Option<&Path>,
        message_font_size: f32,
    ) -> Result<Self> {
        let egui_ctx = egui::Context::default();
        install_fonts(&egui_ctx, message_font)?;

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let egui_renderer =
            egui_wgpu::Renderer::new(&context.device, context.config.format, None, 1, false);

        Ok(Self {
            egui_ctx,
            egui_winit,
            egui_renderer,
            message_font_size,
        })
    }

    /// Keep egui's view of the window (size, scale factor) current
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) {
        let _ = self.egui_winit.on_window_event(window, event);
    }

    /// Draw one frame. A lost or outdated surface is reconfigured and the
    /// frame skipped.
    pub fn present(&mut self, window: &Window, context: &RenderContext, list: &DrawList) -> Result<()> {
        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost, reconfiguring");
                context.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(LuciolesError::RenderError(format!("surface error: {e}"))),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = self.egui_winit.take_egui_input(window);
        let message_size = self.message_font_size;
        let mut clear = Color::BLACK;

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Background,
                egui::Id::new("lucioles"),
            ));
            for command in list.commands() {
                match command {
                    DrawCommand::Fill(color) => clear = *color,
                    DrawCommand::Circle {
                        center,
                        radius,
                        color,
                    } => {
                        painter.circle_filled(to_pos2(*center), *radius, to_color32(*color));
                    }
                    DrawCommand::Text {
                        text,
                        position,
                        centered,
                        color,
                        font,
                    } => {
                        let anchor = if *centered {
                            egui::Align2::CENTER_CENTER
                        } else {
                            egui::Align2::LEFT_TOP
                        };
                        painter.text(
                            to_pos2(*position),
                            anchor,
                            text,
                            to_egui_font(font, message_size),
                            to_color32(*color),
                        );
                    }
                }
            }
        });

        self.egui_winit
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [context.config.width, context.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Lucioles Encoder"),
            });

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&context.device, &context.queue, *id, image_delta);
        }

        let extra_commands = self.egui_renderer.update_buffers(
            &context.device,
            &context.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Lucioles Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(to_wgpu_color(clear)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        context.queue.submit(
            extra_commands
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        output.present();
        Ok(())
    }
}

/// Register the `message` font family: the configured font first, egui's
/// proportional fonts as fallback for missing glyphs
fn install_fonts(ctx: &egui::Context, message_font: Option<&Path>) -> Result<()> {
    let mut fonts = egui::FontDefinitions::default();
    let mut family = Vec::new();

    if let Some(path) = message_font {
        let bytes = std::fs::read(path)
            .map_err(|_| LuciolesError::AssetNotFound(path.to_path_buf()))?;
        fonts
            .font_data
            .insert(MESSAGE_FONT.to_owned(), egui::FontData::from_owned(bytes).into());
        family.push(MESSAGE_FONT.to_owned());
        tracing::info!(path = %path.display(), "loaded message font");
    }

    if let Some(proportional) = fonts.families.get(&egui::FontFamily::Proportional) {
        family.extend(proportional.iter().cloned());
    }
    fonts
        .families
        .insert(egui::FontFamily::Name(MESSAGE_FONT.into()), family);

    ctx.set_fonts(fonts);
    Ok(())
}

fn to_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

fn to_color32(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.to_rgba8();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn to_wgpu_color(color: Color) -> wgpu::Color {
    let [r, g, b, a] = color.to_array().map(f64::from);
    wgpu::Color { r, g, b, a }
}

/// Only the message family is registered by name; anything else falls back
/// to the UI font
fn to_egui_font(font: &FontId, message_size: f32) -> egui::FontId {
    match font {
        FontId::Named(name) if name == MESSAGE_FONT => {
            egui::FontId::new(message_size, egui::FontFamily::Name(MESSAGE_FONT.into()))
        }
        _ => egui::FontId::proportional(UI_FONT_SIZE),
    }
}
