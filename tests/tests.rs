#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use theme_toggle::components::theme_toggle::{
        LOADING_LABEL, READY_LABEL, ThemeToggleView, ThemeToggleViewProps,
        checked_change_handler,
    };
    use theme_toggle::hooks::use_mounted::{MountAction, MountGate};
    use theme_toggle::models::{Theme, ThemeError, is_checked, theme_for_checked};
    use theme_toggle::{App, AppProps};
    use yew::prelude::*;

    // Helper function to record every theme passed to a setter
    fn recording_setter() -> (Rc<RefCell<Vec<Theme>>>, Callback<Theme>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let setter = {
            let calls = calls.clone();
            Callback::from(move |theme| calls.borrow_mut().push(theme))
        };
        (calls, setter)
    }

    // Helper function to server-render the toggle view
    async fn render_view(mounted: bool, resolved_theme: Option<Theme>) -> String {
        yew::ServerRenderer::<ThemeToggleView>::with_props(move || ThemeToggleViewProps {
            mounted,
            resolved_theme,
            on_theme_change: Callback::from(|_| ()),
            class: Classes::new(),
        })
        .hydratable(false)
        .render()
        .await
    }

    // ===== Theme Model Tests =====

    #[test]
    fn test_theme_for_checked() {
        assert_eq!(theme_for_checked(true), Theme::Dark);
        assert_eq!(theme_for_checked(false), Theme::Light);
    }

    #[test]
    fn test_is_checked_requires_mount_and_dark() {
        assert!(is_checked(true, Some(Theme::Dark)));
        assert!(!is_checked(true, Some(Theme::Light)));
        assert!(!is_checked(true, None));
    }

    #[test]
    fn test_is_checked_ignores_theme_before_mount() {
        assert!(!is_checked(false, Some(Theme::Dark)));
        assert!(!is_checked(false, Some(Theme::Light)));
        assert!(!is_checked(false, None));
    }

    #[test]
    fn test_theme_identifiers() {
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    }

    #[test]
    fn test_unknown_theme_error() {
        let result = "system".parse::<Theme>();
        assert_eq!(result, Err(ThemeError::Unknown("system".to_string())));
        assert_eq!(result.unwrap_err().to_string(), "Unknown theme: system");
    }

    #[test]
    fn test_theme_serializes_as_identifier() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
        let theme: Theme = serde_json::from_str(r#""light""#).unwrap();
        assert_eq!(theme, Theme::Light);
    }

    // ===== Mount Gate Tests =====

    #[test]
    fn test_mount_gate_starts_pending() {
        assert_eq!(MountGate::default(), MountGate::Pending);
        assert!(!MountGate::default().is_mounted());
    }

    #[test]
    fn test_mount_gate_never_reverts() {
        let mut gate = Rc::new(MountGate::Pending).reduce(MountAction::Mounted);
        assert!(gate.is_mounted());

        for _ in 0..5 {
            gate = gate.reduce(MountAction::Mounted);
            assert_eq!(*gate, MountGate::Mounted);
        }
    }

    // ===== State Bridge Tests =====

    #[test]
    fn test_toggle_on_sets_dark_once() {
        let (calls, setter) = recording_setter();
        checked_change_handler(setter).emit(true);
        assert_eq!(*calls.borrow(), vec![Theme::Dark]);
    }

    #[test]
    fn test_toggle_off_sets_light_once() {
        let (calls, setter) = recording_setter();
        checked_change_handler(setter).emit(false);
        assert_eq!(*calls.borrow(), vec![Theme::Light]);
    }

    // ===== Rendering Tests =====

    #[tokio::test]
    async fn test_placeholder_before_mount() {
        for theme in [Some(Theme::Dark), Some(Theme::Light), None] {
            let html = render_view(false, theme).await;

            assert!(html.contains(LOADING_LABEL), "missing loading label: {html}");
            assert!(html.contains("disabled"));
            assert!(html.contains(r#"data-state="unchecked""#));
            assert!(!html.contains(r#"role="switch""#));
            assert!(!html.contains("theme-icon"));
        }
    }

    #[tokio::test]
    async fn test_dark_renders_checked_moon() {
        let html = render_view(true, Some(Theme::Dark)).await;

        assert!(html.contains(r#"role="switch""#));
        assert!(html.contains(READY_LABEL));
        assert!(html.contains(r#"aria-checked="true""#));
        assert!(html.contains(r#"data-state="checked""#));
        assert!(html.contains("theme-icon-moon"));
        assert!(!html.contains("theme-icon-sun"));
        assert!(!html.contains("disabled"));
    }

    #[tokio::test]
    async fn test_light_renders_unchecked_sun() {
        for theme in [Some(Theme::Light), None] {
            let html = render_view(true, theme).await;

            assert!(html.contains(r#"aria-checked="false""#));
            assert!(html.contains(r#"data-state="unchecked""#));
            assert!(html.contains("theme-icon-sun"));
            assert!(!html.contains("theme-icon-moon"));
            assert!(!html.contains("disabled"));
        }
    }

    #[tokio::test]
    async fn test_server_render_is_never_mounted() {
        let html = yew::ServerRenderer::<App>::with_props(|| AppProps {
            default_theme: Some(Theme::Dark),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(LOADING_LABEL));
        assert!(!html.contains(READY_LABEL));
        assert!(!html.contains("aria-checked"));
    }
}
