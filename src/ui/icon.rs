use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing/coloring
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const FILM: &str = "film";
    pub const STAR: &str = "star";
    pub const STAR_OUTLINE: &str = "star-outline";
    pub const SEARCH: &str = "search";
    pub const USER: &str = "user";
    pub const LOGOUT: &str = "logout";
    pub const EDIT: &str = "edit";
    pub const TRASH: &str = "trash";
    pub const PLUS: &str = "plus";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const UPLOAD: &str = "upload";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const HOME: &str = "home";
    pub const TICKET: &str = "ticket";
}
