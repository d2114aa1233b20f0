use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const BORDER_COOKIE: &str = "description_border";
pub const SELECT_COOKIE: &str = "description_select";

const FRAME_BASE_CLASS: &str = "description-frame w-[200px] md:w-[200px] h-auto relative hover:cursor-pointer";
const FRAME_BORDER_CLASS: &str = "border-2 border-purple-600 rounded-2xl";
const SWATCH_BASE_CLASS: &str = "h-10 w-10";

/// Click state of the home page description block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescriptionState {
    pub has_border: bool,
    pub has_select: bool,
}

impl DescriptionState {
    /// Read both flags from the visitor's cookies. Missing or unreadable
    /// cookies count as `false`.
    pub fn from_jar(jar: &CookieJar) -> Self {
        Self {
            has_border: read_flag(jar, BORDER_COOKIE),
            has_select: read_flag(jar, SELECT_COOKIE),
        }
    }

    /// Write both flags back as cookies.
    pub fn store(&self, jar: CookieJar) -> CookieJar {
        jar.add(flag_cookie(BORDER_COOKIE, self.has_border))
            .add(flag_cookie(SELECT_COOKIE, self.has_select))
    }

    pub fn toggle_border(&mut self) {
        self.has_border = !self.has_border;
    }

    pub fn toggle_select(&mut self) {
        self.has_select = !self.has_select;
    }

    /// Classes for the clickable image frame.
    pub fn frame_class(&self) -> String {
        if self.has_border {
            format!("{} {}", FRAME_BASE_CLASS, FRAME_BORDER_CLASS)
        } else {
            FRAME_BASE_CLASS.to_string()
        }
    }

    /// Classes for the clickable colour swatch.
    pub fn swatch_class(&self) -> String {
        let colour = if self.has_select { "bg-pink-400" } else { "bg-purple-400" };
        format!("{} {}", SWATCH_BASE_CLASS, colour)
    }
}

fn read_flag(jar: &CookieJar, name: &str) -> bool {
    jar.get(name)
        .map(|c| c.value() == "1")
        .unwrap_or(false)
}

fn flag_cookie(name: &'static str, value: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, if value { "1" } else { "0" });
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        let state = DescriptionState::default();
        assert!(!state.has_border);
        assert!(!state.has_select);
    }

    #[test]
    fn test_toggle_border_twice_restores_flag() {
        let mut state = DescriptionState::default();
        state.toggle_border();
        assert!(state.has_border);
        state.toggle_border();
        assert_eq!(state, DescriptionState::default());
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut state = DescriptionState::default();
        state.toggle_select();
        assert!(state.has_select);
        assert!(!state.has_border);
    }

    #[test]
    fn test_frame_class_follows_border() {
        let mut state = DescriptionState::default();
        assert!(!state.frame_class().contains("border-purple-600"));
        state.toggle_border();
        assert!(state.frame_class().contains("border-2 border-purple-600 rounded-2xl"));
    }

    #[test]
    fn test_swatch_class_follows_select() {
        let mut state = DescriptionState::default();
        assert!(state.swatch_class().ends_with("bg-purple-400"));
        state.toggle_select();
        assert!(state.swatch_class().ends_with("bg-pink-400"));
    }

    #[test]
    fn test_round_trip_through_cookies() {
        let state = DescriptionState { has_border: true, has_select: false };
        let jar = state.store(CookieJar::new());
        assert_eq!(DescriptionState::from_jar(&jar), state);
    }

    #[test]
    fn test_garbage_cookie_reads_false() {
        let jar = CookieJar::new().add(Cookie::new(BORDER_COOKIE, "yes"));
        assert!(!DescriptionState::from_jar(&jar).has_border);
    }
}
