use egui::{Color32, ComboBox, Context, RichText, Ui};
use log::error;
use plotters::style::RGBColor;

use super::theme::{contrast_text, to_color32};
use super::Dashboard;
use crate::types::{FilterParams, TypeSelection, YearMonth};
use crate::utils::{format_thousands, month_options, tracked_span};

const BRAND_DOCS_URL: &str = "https://posit-dev.github.io/brand-yml/";

/// Draw the main application UI
pub fn draw_ui(app: &mut Dashboard, ctx: &Context) {
    // Render before drawing so the first frame already has a chart
    if app.update_needed {
        match app.render() {
            Ok((chart, _)) => {
                let image = egui::ColorImage::from_rgb(
                    [chart.width as usize, chart.height as usize],
                    &chart.pixels,
                );
                app.chart_texture =
                    Some(ctx.load_texture("subscription_chart", image, egui::TextureOptions::LINEAR));
                app.error_message = None;
            }
            Err(e) => {
                error!("Plotting error: {}", e);
                app.record_render_error(e.to_string());
            }
        }
    }

    egui::SidePanel::left("filter_panel").show(ctx, |ui| {
        ui.heading("Filters");
        ui.separator();
        if let Some(next) = filter_controls(ui, app) {
            app.set_params(next);
        }
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.title.as_str());
        ui.separator();

        ui.columns(2, |columns| {
            chart_card(&mut columns[0], app);
            summary_column(&mut columns[1], app);
        });
    });
}

/// Side panel selectors. Returns the new parameters when any control changed.
fn filter_controls(ui: &mut Ui, app: &Dashboard) -> Option<FilterParams> {
    let current = app.params();

    let mut type_label = current.subscription_type.label().to_string();
    ui.label("Select Subscription Type");
    ComboBox::new("type_selector", "")
        .selected_text(&type_label)
        .show_ui(ui, |ui| {
            for option in app.type_options() {
                ui.selectable_value(&mut type_label, option.clone(), option);
            }
        });

    let start = month_year_selectors(ui, "start", "Start", current.start, app.year_options());
    let end = month_year_selectors(ui, "end", "End", current.end, app.year_options());

    let next = FilterParams {
        subscription_type: TypeSelection::from_label(&type_label),
        start,
        end,
    };
    (next != *current).then_some(next)
}

fn month_year_selectors(
    ui: &mut Ui,
    id: &str,
    label: &str,
    value: YearMonth,
    years: &[i32],
) -> YearMonth {
    let mut month = format!("{:02}", value.month());
    ui.label(format!("Select {} Month", label));
    ComboBox::new(format!("{}_month", id), "")
        .selected_text(&month)
        .show_ui(ui, |ui| {
            for option in month_options() {
                ui.selectable_value(&mut month, option.clone(), option);
            }
        });

    let mut year = value.year();
    ui.label(format!("Select {} Year", label));
    ComboBox::new(format!("{}_year", id), "")
        .selected_text(year.to_string())
        .show_ui(ui, |ui| {
            for option in years {
                ui.selectable_value(&mut year, *option, option.to_string());
            }
        });

    month
        .parse::<u32>()
        .ok()
        .and_then(|m| YearMonth::new(year, m).ok())
        .unwrap_or(value)
}

fn chart_card(ui: &mut Ui, app: &Dashboard) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.heading("Subscriptions by type");
        if let Some(message) = &app.error_message {
            ui.colored_label(Color32::RED, format!("Could not draw chart: {}", message));
        }
        if let Some(texture) = &app.chart_texture {
            ui.add(egui::Image::new(texture).max_width(ui.available_width()));
        }
    });
}

fn summary_column(ui: &mut Ui, app: &Dashboard) {
    let summaries = app.summaries();
    let palette = app.palette;

    value_box(
        ui,
        palette.primary,
        "Current Subscriptions",
        &format_thousands(summaries.current_subscriptions),
        "Total current active subscriptions",
    );
    value_box(
        ui,
        palette.secondary,
        "Most Popular Type",
        summaries.most_popular_type.as_deref().unwrap_or("-"),
        "By total subscriptions",
    );
    value_box(
        ui,
        palette.info,
        "Months Tracked",
        &summaries.months_tracked.to_string(),
        &tracked_span(summaries.first_date, summaries.last_date),
    );

    ui.add_space(8.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.heading("Dashboard styled with _brand.yml");
        ui.label("This dashboard takes its chart and interface colors from a _brand.yml file.");
        ui.label("Learn more:");
        ui.hyperlink_to("_brand.yml documentation", BRAND_DOCS_URL);
    });
}

fn value_box(ui: &mut Ui, fill: RGBColor, title: &str, value: &str, caption: &str) {
    let text = contrast_text(fill);
    egui::Frame::none()
        .fill(to_color32(fill))
        .rounding(8.0)
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(title).color(text));
            ui.label(RichText::new(value).color(text).size(28.0).strong());
            ui.label(RichText::new(caption).color(text).small());
        });
    ui.add_space(8.0);
}
