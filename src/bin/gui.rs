#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Corner, Legend, Line, Plot, PlotBounds, PlotPoints};
use image::GenericImageView;
use log::{info, warn};
use neutron_property_calculator::{
    chart::{self, ChartSeries},
    config, conversion, i18n,
    quantity::{NeutronState, QuantityKind},
    sampling::{self, AxisScale, AxisSpec},
    ui_cli::parse_number,
};
use std::{env, fs, path::Path};

const CURVE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x1f, 0x77, 0xb4);

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport =
        egui::ViewportBuilder::default().with_inner_size(egui::vec2(1100.0, 720.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!("설정을 읽지 못해 기본값을 사용합니다: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Neutron Property Calculator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록. 기본 폰트 뒤에 폴백으로 붙인다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글 라벨 표시용 폰트를 찾는다.
/// 1) assets/fonts/ 아래 폰트
/// 2) 시스템 폰트(Windows 맑은 고딕, Linux/macOS CJK 폰트)
/// 3) 모두 실패 시 Err (기본 폰트로 계속 동작, 한글만 깨진다)
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/malgun.ttf".into(),
        "assets/fonts/NanumGothic.ttf".into(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc"] {
            candidates.push(fonts.join(cand));
        }
    }
    candidates.push("/usr/share/fonts/truetype/nanum/NanumGothic.ttf".into());
    candidates.push("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".into());
    candidates.push("/System/Library/Fonts/AppleSDGothicNeo.ttc".into());

    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            info!("폰트 적용: {}", p.display());
            return Ok(());
        }
    }
    Err("Korean font not found; using default fonts.".into())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 축 설정 입력 상태. 범위는 문자열로 받아 Set 시점에 해석한다.
struct AxisInput {
    kind: QuantityKind,
    min: String,
    max: String,
    scale: AxisScale,
}

impl AxisInput {
    fn from_spec(spec: &AxisSpec) -> Self {
        Self {
            kind: spec.kind,
            min: spec.min.to_string(),
            max: spec.max.to_string(),
            scale: spec.scale,
        }
    }

    /// 숫자가 아닌 범위 입력은 NaN으로 두어 퇴화 범위로 처리되게 한다.
    fn to_spec(&self) -> AxisSpec {
        AxisSpec::new(
            self.kind,
            parse_number(&self.min).unwrap_or(f64::NAN),
            parse_number(&self.max).unwrap_or(f64::NAN),
            self.scale,
        )
    }
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    decimals_input: usize,
    settings_status: Option<String>,
    show_settings_modal: bool,
    show_help_modal: bool,
    // 단일 계산
    calc_kind: QuantityKind,
    calc_input: String,
    calc_result: Option<NeutronState>,
    calc_error: Option<String>,
    // 차트
    x_axis: AxisInput,
    y_axis: AxisInput,
    series: Option<ChartSeries>,
    reset_bounds: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr =
            i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        Self {
            tr,
            lang_input: config.language.clone(),
            decimals_input: config.decimals,
            settings_status: None,
            show_settings_modal: false,
            show_help_modal: false,
            calc_kind: config.input_kind,
            calc_input: String::new(),
            calc_result: None,
            calc_error: None,
            x_axis: AxisInput::from_spec(&config.x_axis),
            y_axis: AxisInput::from_spec(&config.y_axis),
            series: None,
            reset_bounds: false,
            config,
        }
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// Calculate 버튼: 숫자가 아니면 엔진을 호출하지 않고 오류를 표시한다.
    fn run_calculation(&mut self) {
        match parse_number(&self.calc_input) {
            Some(v) => {
                self.calc_result = Some(conversion::convert_all(v, self.calc_kind));
                self.calc_error = None;
            }
            None => {
                self.calc_error =
                    Some(self.txt("gui.calc.invalid_number", "Please enter a valid number."));
            }
        }
    }

    /// Set 버튼: 현재 축 설정으로 곡선을 다시 샘플링한다.
    fn update_plot(&mut self) {
        let x = self.x_axis.to_spec();
        let y = self.y_axis.to_spec();
        let curve = sampling::sample(&x, &y);
        self.series = Some(ChartSeries::from_curve(&curve, &x, &y));
        self.reset_bounds = true;
    }

    fn ui_calculator(&mut self, ui: &mut egui::Ui) {
        heading_with_tip(
            ui,
            &self.txt("gui.calc.heading", "Neutron Property Calculator"),
            &self.txt("gui.calc.tip", "Enter one property to derive all five."),
        );
        ui.add_space(6.0);
        egui::Grid::new("calc_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                label_with_tip(
                    ui,
                    &self.txt("gui.calc.input_type", "Input type:"),
                    &self.txt("gui.calc.input_type_tip", "Quantity of the entered value"),
                );
                kind_combo(ui, "calc_kind", &mut self.calc_kind);
                ui.end_row();

                ui.label(self.txt("gui.calc.value", "Value:"));
                let resp = ui.text_edit_singleline(&mut self.calc_input);
                if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.run_calculation();
                }
                ui.end_row();
            });
        if ui.button(self.txt("gui.calc.run", "Calculate")).clicked() {
            self.run_calculation();
        }
        if let Some(err) = &self.calc_error {
            ui.colored_label(ui.visuals().error_fg_color, err);
        }
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(self.txt("gui.calc.result", "Calculation Result:")).strong(),
        );
        egui::Grid::new("calc_result")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for kind in QuantityKind::ALL {
                    ui.label(kind.label());
                    let text = self
                        .calc_result
                        .map(|s| chart::format_value(s.get(kind), self.config.decimals))
                        .unwrap_or_else(|| "-".to_string());
                    ui.monospace(text);
                    ui.end_row();
                }
            });
    }

    fn ui_axis_controls(&mut self, ui: &mut egui::Ui) {
        let titles = [
            (
                self.txt("gui.axis.x_heading", "X Axis Settings"),
                self.txt("gui.axis.x_property", "X Axis Property:"),
            ),
            (
                self.txt("gui.axis.y_heading", "Y Axis Settings"),
                self.txt("gui.axis.y_property", "Y Axis Property:"),
            ),
        ];
        let range_label = self.txt("gui.axis.range", "Range:");
        let to_label = self.txt("gui.axis.to", "to");
        let scale_label = self.txt("gui.axis.scale", "Scale:");
        for (idx, (heading, property)) in titles.iter().enumerate() {
            let axis = if idx == 0 {
                &mut self.x_axis
            } else {
                &mut self.y_axis
            };
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.strong(heading);
                ui.horizontal(|ui| {
                    ui.label(property);
                    kind_combo(ui, ("axis_kind", idx), &mut axis.kind);
                });
                ui.horizontal(|ui| {
                    ui.label(&range_label);
                    ui.add(
                        egui::TextEdit::singleline(&mut axis.min)
                            .hint_text("Min")
                            .desired_width(80.0),
                    );
                    ui.label(&to_label);
                    ui.add(
                        egui::TextEdit::singleline(&mut axis.max)
                            .hint_text("Max")
                            .desired_width(80.0),
                    );
                });
                ui.horizontal(|ui| {
                    ui.label(&scale_label);
                    ui.radio_value(&mut axis.scale, AxisScale::Log, "log");
                    ui.radio_value(&mut axis.scale, AxisScale::Linear, "linear");
                });
            });
            ui.add_space(4.0);
        }
        if ui.button(self.txt("gui.axis.set", "Set")).clicked() {
            self.update_plot();
        }
    }

    fn ui_chart(&mut self, ui: &mut egui::Ui) {
        let reset = std::mem::take(&mut self.reset_bounds);
        let no_plot = self.txt("gui.chart.no_plot", "Configure the axes and press Set.");
        let no_points = self.txt(
            "gui.chart.no_points",
            "X range is invalid (log: 0 < min < max, linear: min < max); nothing to plot.",
        );
        let Some(series) = &self.series else {
            ui.label(no_plot);
            return;
        };
        ui.heading(&series.title);
        if series.segments.is_empty() {
            ui.label(no_points);
        }
        let (x_scale, y_scale) = (series.x_scale, series.y_scale);
        let mut plot = Plot::new("neutron_curve")
            .legend(Legend::default().position(Corner::RightTop))
            .x_axis_label(series.x_title)
            .y_axis_label(series.y_title)
            .x_axis_formatter(move |mark, _max_chars, _range| {
                chart::axis_tick_label(mark.value, x_scale)
            })
            .y_axis_formatter(move |mark, _max_chars, _range| {
                chart::axis_tick_label(mark.value, y_scale)
            })
            .label_formatter(move |_name, p| {
                format!(
                    "x = {}\ny = {}",
                    chart::axis_tick_label(p.x, x_scale),
                    chart::axis_tick_label(p.y, y_scale)
                )
            })
            .height(ui.available_height().max(240.0));
        if let Some((lo, hi)) = series.x_bounds {
            plot = plot.include_x(lo).include_x(hi);
        }
        if let Some((lo, hi)) = series.y_bounds {
            plot = plot.include_y(lo).include_y(hi);
        }
        plot.show(ui, |plot_ui| {
            for seg in &series.segments {
                plot_ui.line(
                    Line::new(PlotPoints::from(seg.clone()))
                        .color(CURVE_COLOR)
                        .width(2.0)
                        .name(&series.title),
                );
            }
            if reset {
                if let (Some(x), Some(y)) = (series.x_bounds, series.y_bounds) {
                    plot_ui
                        .set_plot_bounds(PlotBounds::from_min_max([x.0, y.0], [x.1, y.1]));
                }
            }
        });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        let title = self.txt("gui.settings.title", "Settings");
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(self.txt("gui.settings.lang", "Language"));
                let auto_label = self.txt("gui.settings.lang_auto", "System");
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(self.lang_input.clone())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), auto_label);
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                    });
                ui.separator();
                ui.label(self.txt("gui.settings.decimals", "Result decimals"));
                ui.add(egui::Slider::new(&mut self.decimals_input, 0..=10));
                ui.separator();
                if ui.button(self.txt("gui.settings.save", "Save settings")).clicked() {
                    self.save_settings();
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
    }

    /// 언어/소수 자릿수와 현재 축 설정을 config.toml에 저장하고 번역기를 즉시 바꾼다.
    fn save_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        self.config.decimals = self.decimals_input;
        self.config.input_kind = self.calc_kind;
        self.config.x_axis = self.x_axis.to_spec();
        self.config.y_axis = self.y_axis.to_spec();
        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr =
            i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.settings_status = Some(match self.config.save() {
            Ok(()) => self.txt("gui.settings.saved", "Saved."),
            Err(e) => format!("{}: {e}", self.txt("gui.settings.save_error", "Save error")),
        });
    }

    fn ui_help(&mut self, ctx: &egui::Context) {
        let mut open = self.show_help_modal;
        egui::Window::new(self.txt("gui.about.title", "Help / About"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.heading(self.txt(
                    "gui.about.app",
                    "Neutron wavelength/energy/temperature/velocity/wavenumber converter",
                ));
                ui.separator();
                ui.label("λ = h / (m_n·v)");
                ui.label("E = ½·m_n·v²,  T = E / k_B");
                ui.label("k = 2π / λ");
                ui.separator();
                ui.label(self.txt(
                    "gui.about.undefined",
                    "NaN/Infinity: undefined for this input (zero or negative energy/temperature, etc).",
                ));
                ui.label(self.txt(
                    "gui.about.log_axis",
                    "Log axes are drawn in log10 space; tick labels show the real values.",
                ));
            });
        self.show_help_modal = open;
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.txt("gui.nav.app_title", "Neutron Property Calculator"));
                ui.separator();
                if ui.button(self.txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(self.txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }
        if self.show_help_modal {
            self.ui_help(ctx);
        }

        egui::SidePanel::left("controls")
            .resizable(true)
            .min_width(300.0)
            .default_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                    self.ui_calculator(ui);
                    ui.separator();
                    self.ui_axis_controls(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_chart(ui);
        });
    }
}

fn kind_combo(ui: &mut egui::Ui, id: impl std::hash::Hash, value: &mut QuantityKind) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.label())
        .width(180.0)
        .show_ui(ui, |ui| {
            for kind in QuantityKind::ALL {
                ui.selectable_value(value, kind, kind.label());
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_input_keeps_previous_result() {
        let mut app = GuiApp::new(config::Config::default());
        app.calc_input = "1".into();
        app.run_calculation();
        let first = app.calc_result.expect("result");
        app.calc_input = "abc".into();
        app.run_calculation();
        assert!(app.calc_error.is_some());
        assert_eq!(app.calc_result, Some(first));
    }

    #[test]
    fn empty_range_fields_give_degenerate_axis() {
        let mut app = GuiApp::new(config::Config::default());
        app.x_axis.min.clear();
        app.update_plot();
        let series = app.series.as_ref().expect("series");
        assert!(series.segments.is_empty());
        assert_eq!(series.x_bounds, None);
    }

    #[test]
    fn default_axes_plot_energy_against_wavelength() {
        let mut app = GuiApp::new(config::Config::default());
        app.update_plot();
        let series = app.series.as_ref().expect("series");
        assert_eq!(series.title, "Energy (eV) vs Wavelength (Å)");
        assert_eq!(series.point_count(), sampling::DEFAULT_SAMPLE_COUNT);
        assert!(app.reset_bounds);
    }
}
