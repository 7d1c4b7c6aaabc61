//! Images resolved by the asset collaborator.
//!
//! The page only supplies path, intrinsic size and alt text; serving and
//! resizing happen outside the app.

use dioxus::prelude::*;
use portfolio_core::ImageSpec;

#[derive(Clone, PartialEq, Props)]
pub struct PictureProps {
    pub image: ImageSpec,
    #[props(default)]
    pub class: Option<String>,
    /// Load immediately instead of when scrolled near
    #[props(default = false)]
    pub eager: bool,
}

#[component]
pub fn Picture(props: PictureProps) -> Element {
    let image = props.image;
    let loading = if props.eager { "eager" } else { "lazy" };

    rsx! {
        img {
            src: image.path,
            alt: image.alt,
            width: "{image.width}",
            height: "{image.height}",
            loading: loading,
            decoding: "async",
            class: props.class.clone(),
        }
    }
}
