#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::error::DashboardError;
    use plotters::style::RGBColor;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const BRAND_YAML: &str = r##"
meta:
  name:
    short: Acme
    full: Acme Subscriptions Inc.
color:
  palette:
    neutral: "#eee"
    black: "#000"
    violet: "#551A8B"
    red: "#FF0000"
    green: "#00AA00"
  foreground: black
  background: neutral
  primary: violet
  info: "#123456"
"##;

    fn brand_without(role: &str) -> BrandSpec {
        let mut brand = BrandSpec::from_yaml_str(BRAND_YAML).unwrap();
        brand.color.palette.remove(role);
        brand
    }

    #[test]
    fn test_cycle_strips_hash() {
        let brand = BrandSpec::from_yaml_str(BRAND_YAML).unwrap();
        let style = translate(&brand).unwrap();

        assert_eq!(style.color_cycle, vec!["551A8B", "FF0000", FALLBACK_CYCLE_COLOR]);
        assert!(style.color_cycle.iter().all(|c| !c.starts_with('#')));
    }

    #[test]
    fn test_scalar_mappings_match_palette() {
        let brand = BrandSpec::from_yaml_str(BRAND_YAML).unwrap();
        let style = translate(&brand).unwrap();

        let neutral_keys = ["axes.facecolor", "figure.facecolor"];
        for (key, value) in style.entries() {
            let expected = if neutral_keys.contains(&key) { "#eee" } else { "#000" };
            assert_eq!(value, expected, "{key}");
        }
    }

    #[test]
    fn test_missing_palette_keys() {
        for role in ["neutral", "black", "violet", "red"] {
            match translate(&brand_without(role)) {
                Err(DashboardError::MissingPaletteKey(missing)) => assert_eq!(missing, role),
                other => panic!("expected MissingPaletteKey for {role}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_palette_section() {
        let brand = BrandSpec::from_yaml_str("meta:\n  name: Plain\n").unwrap();
        assert!(matches!(
            translate(&brand),
            Err(DashboardError::MissingPaletteKey(_))
        ));
        assert_eq!(brand.display_name(), Some("Plain"));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            BrandSpec::from_yaml_str("color: [unclosed"),
            Err(DashboardError::BrandParse(_))
        ));
    }

    #[test]
    fn test_stylesheet_text() {
        let brand = BrandSpec::from_yaml_str(BRAND_YAML).unwrap();
        let sheet = translate(&brand).unwrap().to_stylesheet();
        let lines: Vec<&str> = sheet.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "axes.facecolor: \"#eee\"");
        assert_eq!(lines[1], "axes.edgecolor: \"#000\"");
        assert_eq!(
            lines[9],
            "axes.prop_cycle: cycler(color=['551A8B', 'FF0000', 'g'])"
        );
    }

    #[test]
    fn test_install_removes_temporary_sheet() {
        let temp_dir = TempDir::new().unwrap();
        let brand = BrandSpec::from_yaml_str(BRAND_YAML).unwrap();
        let theme = install_in(temp_dir.path(), &translate(&brand).unwrap()).unwrap();

        assert_eq!(theme.axes_face, RGBColor(0xee, 0xee, 0xee));
        assert_eq!(theme.axes_edge, RGBColor(0, 0, 0));
        assert_eq!(theme.color_cycle.len(), 3);
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_install_into_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let brand = BrandSpec::from_yaml_str(BRAND_YAML).unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        assert!(matches!(
            install_in(&missing, &translate(&brand).unwrap()),
            Err(DashboardError::Resource(_))
        ));
    }

    #[test]
    fn test_ui_palette_resolves_roles() {
        let brand = BrandSpec::from_yaml_str(BRAND_YAML).unwrap();
        let palette = UiPalette::from_brand(&brand).unwrap();

        assert_eq!(palette.background, RGBColor(0xee, 0xee, 0xee));
        assert_eq!(palette.foreground, RGBColor(0, 0, 0));
        assert_eq!(palette.primary, RGBColor(0x55, 0x1a, 0x8b));
        // no `secondary` theme color: falls back to the red palette role
        assert_eq!(palette.secondary, RGBColor(0xff, 0, 0));
        assert_eq!(palette.info, RGBColor(0x12, 0x34, 0x56));
        assert_eq!(brand.display_name(), Some("Acme Subscriptions Inc."));
    }

    #[test]
    fn test_theme_from_brand_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("_brand.yml");
        std::fs::write(&path, BRAND_YAML).unwrap();

        let (brand, theme) = theme_from_brand_file(&path).unwrap();
        assert_eq!(brand.palette("violet"), Some("#551A8B"));
        assert_eq!(theme.series_color(2), RGBColor(0, 128, 0));
    }
}
