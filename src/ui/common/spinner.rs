use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Ring spinner shown while the hero frames load
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("spinner {} {}", size.class(), class) role="status" aria-live="polite">
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_classes() {
        assert_eq!(SpinnerSize::Small.class(), "spinner-sm");
        assert_eq!(SpinnerSize::default().class(), "spinner-md");
        assert_eq!(SpinnerSize::Large.class(), "spinner-lg");
    }

    #[test]
    fn test_extra_classes_are_appended() {
        let html = Owner::new().with(|| {
            view! { <Spinner size=SpinnerSize::Large class="mb-4" /> }.to_html()
        });
        assert!(html.contains("spinner spinner-lg mb-4"));
        assert!(html.contains("role=\"status\""));
    }
}
