//! View surface: the `View` trait, the type-erased `AnyView`, and a
//! minimal `Text` leaf.

///
/// View
///
/// Anything that can produce a render-tree fragment. Generated companion
/// views implement this; their `body` is the synthesized case dispatch.
///

pub trait View {
    fn body(&self) -> AnyView;
}

///
/// AnyView
///
/// Type-erased view, the unit of composition for generated dispatch. The
/// empty view is a first-class value: it is what an inactive or
/// payload-less case renders.
///

pub struct AnyView(Option<Box<dyn View>>);

impl AnyView {
    #[must_use]
    pub const fn empty() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn new(view: impl View + 'static) -> Self {
        Self(Some(Box::new(view)))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl View for AnyView {
    fn body(&self) -> AnyView {
        match &self.0 {
            Some(view) => view.body(),
            None => Self::empty(),
        }
    }
}

///
/// Text
///
/// Minimal leaf view. Mostly useful in examples and tests.
///

pub struct Text {
    content: String,
}

impl Text {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl View for Text {
    fn body(&self) -> AnyView {
        AnyView::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_view_is_empty() {
        assert!(AnyView::empty().is_empty());
    }

    #[test]
    fn erased_view_is_not_empty() {
        assert!(!AnyView::new(Text::new("hello")).is_empty());
    }

    #[test]
    fn erased_body_delegates_to_the_inner_view() {
        let view = AnyView::new(Text::new("hello"));
        // Text is a leaf; its body is empty.
        assert!(view.body().is_empty());
    }

    #[test]
    fn text_keeps_its_content() {
        assert_eq!(Text::new("hello").content(), "hello");
    }
}
