//! Light/dark theme flag and the style classes derived from it.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        self.is_dark()
    }

    /// Glyph for the toggle button: the sun offers light mode, the moon offers dark.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// Nav bar background. The only derivation that also depends on scroll position.
    pub fn nav_class(self, scrolled: bool) -> &'static str {
        match (self, scrolled) {
            (_, false) => "bg-transparent",
            (Self::Dark, true) => "bg-slate-950/95 backdrop-blur-md shadow-lg shadow-slate-900/50",
            (Self::Light, true) => "bg-white/95 backdrop-blur-md shadow-lg shadow-slate-200/50",
        }
    }
}

/// Tailwind class selections for one theme.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub nav_border: &'static str,
    pub toggle: &'static str,
    pub text_heading: &'static str,
    pub text_body: &'static str,
    pub text_muted: &'static str,
    pub text_faint: &'static str,
    pub card: &'static str,
    pub card_shadow: &'static str,
    pub hero_glow: &'static str,
    pub photo_halo: &'static str,
    pub photo_frame: &'static str,
    pub carousel_backdrop: &'static str,
    pub carousel_overlay: &'static str,
    pub control: &'static str,
    pub control_icon: &'static str,
    pub dot_inactive: &'static str,
    pub accent_border: &'static str,
    pub highlight_chip: &'static str,
    pub tech_chip: &'static str,
    pub band: &'static str,
    pub skill_chip: &'static str,
    pub grade_text: &'static str,
    pub divider: &'static str,
    pub email_link: &'static str,
    pub email_text: &'static str,
    pub social_link: &'static str,
    /// Placeholder image background/foreground as hex without `#`.
    pub placeholder_colors: (&'static str, &'static str),
}

static DARK: Palette = Palette {
    page: "bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950 text-gray-100",
    nav_border: "border-slate-800/50",
    toggle: "text-emerald-400 hover:bg-slate-700",
    text_heading: "text-white",
    text_body: "text-slate-300",
    text_muted: "text-slate-400",
    text_faint: "text-slate-500",
    card: "bg-slate-900/50 border-slate-800 hover:border-emerald-500/30",
    card_shadow: "hover:shadow-emerald-500/10",
    hero_glow: "from-emerald-500/5",
    photo_halo: "opacity-30",
    photo_frame: "border-slate-800 shadow-emerald-500/20",
    carousel_backdrop: "bg-slate-950",
    carousel_overlay: "from-slate-900",
    control: "bg-slate-900/80 border-slate-700 hover:border-emerald-500/50 hover:bg-slate-800",
    control_icon: "text-slate-300",
    dot_inactive: "w-1.5 bg-slate-600 hover:bg-slate-500",
    accent_border: "border-emerald-500/20",
    highlight_chip: "bg-slate-800/50 text-slate-400 border-slate-700/50",
    tech_chip: "border-emerald-500/20 text-emerald-300",
    band: "bg-slate-900/30",
    skill_chip: "bg-slate-800/70 text-slate-200 border-slate-700/50",
    grade_text: "text-emerald-300",
    divider: "border-slate-800/50",
    email_link: "border-emerald-500/20 hover:border-emerald-500/40",
    email_text: "text-white group-hover:text-emerald-300",
    social_link: "bg-slate-900 border-slate-800 hover:border-emerald-500/40 hover:bg-slate-800 text-slate-400 hover:text-emerald-400",
    placeholder_colors: ("1e293b", "64748b"),
};

static LIGHT: Palette = Palette {
    page: "bg-gradient-to-br from-slate-50 via-white to-slate-100 text-slate-900",
    nav_border: "border-slate-200",
    toggle: "text-emerald-600 hover:bg-slate-200",
    text_heading: "text-slate-900",
    text_body: "text-slate-700",
    text_muted: "text-slate-600",
    text_faint: "text-slate-400",
    card: "bg-white border-slate-200 hover:border-emerald-500/30 shadow-sm",
    card_shadow: "hover:shadow-emerald-500/5",
    hero_glow: "from-emerald-500/10",
    photo_halo: "opacity-20",
    photo_frame: "border-white shadow-emerald-500/10",
    carousel_backdrop: "bg-slate-100",
    carousel_overlay: "from-white/80",
    control: "bg-white/80 border-slate-200 hover:border-emerald-500/50 hover:bg-slate-50",
    control_icon: "text-slate-600",
    dot_inactive: "w-1.5 bg-slate-300 hover:bg-slate-400",
    accent_border: "border-emerald-500/10",
    highlight_chip: "bg-slate-50 text-slate-600 border-slate-200",
    tech_chip: "border-emerald-500/10",
    band: "bg-slate-50",
    skill_chip: "bg-white text-slate-700 border-slate-200 shadow-sm",
    grade_text: "text-emerald-700",
    divider: "border-slate-200",
    email_link: "border-emerald-500/10 hover:border-emerald-500/30",
    email_text: "text-slate-900 group-hover:text-emerald-600",
    social_link: "bg-white border-slate-200 hover:border-emerald-500/30 hover:bg-slate-50 text-slate-600 hover:text-emerald-600",
    placeholder_colors: ("f1f5f9", "94a3b8"),
};
