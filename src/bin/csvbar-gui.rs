/*!
 * Desktop viewer for csvbar
 *
 * Pick or drop a CSV file and see it as a grouped bar chart:
 * - "Open CSV…" button and drag & drop onto the window
 * - Title, category column and row-aligned mode, applied with "Refresh"
 * - Every refresh re-reads the loaded table and rolls new series colors
 *
 * Platform support: Windows, macOS, Linux
 */

use anyhow::Result;
use csvbar::color::{ColorProvider, FixedColors, RandomColors, Rgb8};
use csvbar::surface::{Paint, Point, Rect, Surface};
use csvbar::{ChartSpec, Table, TransposeMode, input, render, transform};
use egui::{Align2, Color32, FontId, Mesh, Pos2, Shape, Stroke, Vec2};
use log::debug;
use std::path::{Path, PathBuf};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 680.0])
            .with_min_inner_size([500.0, 360.0])
            .with_title("csvbar"),
        ..Default::default()
    };

    eframe::run_native(
        "csvbar",
        options,
        Box::new(|_cc| Ok(Box::new(CsvBarApp::new()))),
    )
}

/// Paints through an `egui::Painter` inside one allocated rect.
struct EguiSurface {
    painter: egui::Painter,
    origin: Pos2,
    size: Vec2,
}

impl EguiSurface {
    fn new(painter: egui::Painter, area: egui::Rect) -> Self {
        Self {
            painter,
            origin: area.min,
            size: area.size(),
        }
    }

    fn pos(&self, p: Point) -> Pos2 {
        self.origin + Vec2::new(p.x as f32, p.y as f32)
    }

    fn rect(&self, r: Rect) -> egui::Rect {
        let r = r.normalized();
        egui::Rect::from_min_size(
            self.pos(Point::new(r.x, r.y)),
            Vec2::new(r.width as f32, r.height as f32),
        )
    }
}

fn color32(c: Rgb8) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

impl Surface for EguiSurface {
    fn size(&self) -> (f64, f64) {
        (self.size.x as f64, self.size.y as f64)
    }

    fn clear(&mut self) -> Result<()> {
        let full = egui::Rect::from_min_size(self.origin, self.size);
        self.painter.rect_filled(full, 0.0, Color32::WHITE);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> Result<()> {
        let area = self.rect(rect);
        match paint {
            Paint::Solid(c) => {
                self.painter.rect_filled(area, 0.0, color32(*c));
            }
            Paint::Gradient(g) => {
                let r = rect.normalized();
                let top = color32(g.color_at(r.y));
                let bottom = color32(g.color_at(r.bottom()));
                let mut mesh = Mesh::default();
                mesh.colored_vertex(area.left_top(), top);
                mesh.colored_vertex(area.right_top(), top);
                mesh.colored_vertex(area.right_bottom(), bottom);
                mesh.colored_vertex(area.left_bottom(), bottom);
                mesh.add_triangle(0, 1, 2);
                mesh.add_triangle(0, 2, 3);
                self.painter.add(Shape::mesh(mesh));
            }
        }
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb8, width: f64) -> Result<()> {
        self.painter
            .rect_stroke(self.rect(rect), 0.0, Stroke::new(width as f32, color32(color)));
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb8, width: f64) -> Result<()> {
        self.painter.line_segment(
            [self.pos(from), self.pos(to)],
            Stroke::new(width as f32, color32(color)),
        );
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Point, font_px: f64, color: Rgb8) -> Result<()> {
        self.painter.text(
            self.pos(at),
            Align2::LEFT_CENTER,
            text,
            FontId::proportional(font_px as f32),
            color32(color),
        );
        Ok(())
    }

    fn measure_text(&self, text: &str, font_px: f64) -> f64 {
        let galley = self.painter.layout_no_wrap(
            text.to_owned(),
            FontId::proportional(font_px as f32),
            Color32::BLACK,
        );
        galley.size().x as f64
    }
}

/// Main application state
struct CsvBarApp {
    // Chart options, applied on refresh
    title: String,
    category_column: usize,
    row_aligned: bool,

    // Last loaded data
    table: Option<Table>,
    file_name: String,
    spec: Option<ChartSpec>,
    colors: Vec<Rgb8>,

    // UI state
    status_message: String,
    error_message: String,
}

impl CsvBarApp {
    fn new() -> Self {
        Self {
            title: String::new(),
            category_column: 0,
            row_aligned: false,
            table: None,
            file_name: String::new(),
            spec: None,
            colors: Vec::new(),
            status_message: "Open or drop a CSV file to get started.".to_string(),
            error_message: String::new(),
        }
    }

    fn mode(&self) -> TransposeMode {
        if self.row_aligned {
            TransposeMode::RowAligned
        } else {
            TransposeMode::Literal
        }
    }

    fn load_table(&mut self, name: String, loaded: Result<Table, input::InputError>) {
        match loaded {
            Ok(table) => {
                self.table = Some(table);
                self.file_name = name;
                self.category_column = 0;
                self.refresh();
            }
            Err(err) => {
                self.error_message = err.to_string();
            }
        }
    }

    fn load_path(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let loaded = input::load_table(path);
        self.load_table(name, loaded);
    }

    /// Rebuild the chart from the loaded table with the current options and fresh colors.
    fn refresh(&mut self) {
        let Some(table) = &self.table else {
            return;
        };
        let data = transform::prepare(table, self.category_column, self.mode());
        self.colors = RandomColors::new().take_colors(data.series.len());
        debug!(
            "refreshed {}: {} categories, {} series, colors {:?}",
            self.file_name,
            data.categories.len(),
            data.series.len(),
            self.colors
        );
        self.status_message = format!(
            "{}: {} categories, {} series",
            self.file_name,
            data.categories.len(),
            data.series.len()
        );
        self.error_message.clear();
        self.spec = Some(ChartSpec::new(self.title.clone(), data));
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };
        if let Some(path) = &file.path {
            self.load_path(path);
        } else if let Some(bytes) = &file.bytes {
            let media_type = if file.mime.is_empty() {
                input::media_type_for_path(Path::new(&file.name))
            } else {
                Some(file.mime.as_str())
            };
            let loaded = input::table_from_bytes(media_type, bytes);
            self.load_table(file.name.clone(), loaded);
        } else {
            self.error_message =
                "This platform did not hand over the dropped file's contents.".to_string();
        }
    }

    fn column_count(&self) -> usize {
        self.table
            .as_ref()
            .and_then(|t| t.first())
            .map_or(0, Vec::len)
    }
}

fn start_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

impl eframe::App for CsvBarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Open CSV…").clicked() {
                    let picked = rfd::FileDialog::new()
                        .add_filter("CSV", &["csv"])
                        .set_directory(start_dir())
                        .pick_file();
                    if let Some(path) = picked {
                        self.load_path(&path);
                    }
                }

                ui.separator();
                ui.label("Title:");
                ui.text_edit_singleline(&mut self.title);

                ui.label("Category column:");
                let max_col = self.column_count().saturating_sub(1);
                ui.add(egui::DragValue::new(&mut self.category_column).range(0..=max_col));

                ui.checkbox(&mut self.row_aligned, "Row-aligned")
                    .on_hover_text("Skip the header row and keep only complete rows");

                if ui
                    .add_enabled(self.table.is_some(), egui::Button::new("Refresh"))
                    .clicked()
                {
                    self.refresh();
                }
            });
            if !self.error_message.is_empty() {
                ui.colored_label(Color32::from_rgb(200, 40, 40), &self.error_message);
            } else {
                ui.label(&self.status_message);
            }
            ui.add_space(4.0);
        });

        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let mut render_error = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            match &self.spec {
                Some(spec) => {
                    let mut surface = EguiSurface::new(painter, response.rect);
                    let mut colors = FixedColors::new(self.colors.clone());
                    if let Err(err) = render(spec, &mut surface, &mut colors) {
                        render_error = Some(err.to_string());
                    }
                }
                None => {
                    let stroke = if hovering {
                        Stroke::new(2.0, Color32::from_rgb(68, 114, 196))
                    } else {
                        Stroke::new(1.0, Color32::GRAY)
                    };
                    painter.rect_stroke(response.rect.shrink(16.0), 8.0, stroke);
                    painter.text(
                        response.rect.center(),
                        Align2::CENTER_CENTER,
                        "Drop a CSV file here",
                        FontId::proportional(20.0),
                        Color32::GRAY,
                    );
                }
            }
        });
        if let Some(err) = render_error {
            self.error_message = err;
        }
    }
}
