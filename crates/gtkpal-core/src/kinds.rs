#![forbid(unsafe_code)]

//! Closed enumerations of the theme model.
//!
//! All of these are matched exhaustively by the adapter and the rule
//! builder; adding a variant is a compile error until every mapping handles
//! it.

named_enum! {
    /// Semantic palettes a widget style can request.
    pub enum PaletteKind: "palette kind" {
        SystemPalette,
        ToolTipPalette,
        ToolButtonPalette,
        ButtonPalette,
        CheckBoxPalette,
        RadioButtonPalette,
        HeaderPalette,
        ComboBoxPalette,
        ItemViewPalette,
        MessageBoxLabelPalette,
        TabBarPalette,
        LabelPalette,
        GroupBoxPalette,
        MenuPalette,
        MenuBarPalette,
        TextEditPalette,
        TextLineEditPalette,
    }
}

named_enum! {
    /// Light/dark variant of a theme.
    ///
    /// `Unknown` is a wildcard: it matches, and is matched by, either
    /// concrete appearance.
    pub enum Appearance: "color scheme" {
        Light,
        Dark,
        Unknown,
    }
}

impl Appearance {
    /// Wildcard-aware comparison.
    #[inline]
    #[must_use]
    pub fn matches(self, other: Self) -> bool {
        self == other || self == Self::Unknown || other == Self::Unknown
    }

    /// Heuristic from a theme name: anything containing "dark"
    /// (case-insensitive) is dark, everything else is light.
    #[must_use]
    pub fn from_theme_name(name: &str) -> Self {
        if name.to_ascii_lowercase().contains("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Decode the desktop settings portal `color-scheme` value.
    ///
    /// `1` prefers dark, `2` prefers light; `0` and anything unrecognized
    /// carry no preference.
    #[must_use]
    pub const fn from_portal_value(value: u32) -> Self {
        match value {
            1 => Self::Dark,
            2 => Self::Light,
            _ => Self::Unknown,
        }
    }
}

named_enum! {
    /// Synthetic native widget kinds used as style-context anchors.
    pub enum WidgetKind: "widget kind" {
        MenuBar,
        Menu,
        Button,
        ButtonBox,
        CheckButton,
        RadioButton,
        Frame,
        Statusbar,
        Entry,
        Popup,
        Notebook,
        Toolbar,
        TreeView,
        ComboBox,
        ComboBoxText,
        ProgressBar,
        Fixed,
        SeparatorMenuItem,
        /// No widget; queries fall back to the default style context.
        Default,
        OffscreenWindow,
    }
}

named_enum! {
    /// Color channel read from a native style context.
    pub enum ColorChannel: "color channel" {
        Foreground,
        Background,
        Text,
        Base,
        Border,
    }
}

named_enum! {
    /// Interaction state a native color is read in.
    pub enum NativeState: "native state" {
        Normal,
        Active,
        Prelight,
        Selected,
        Insensitive,
        Inconsistent,
        Focused,
        Backdrop,
        Link,
        Visited,
        Checked,
        DropActive,
    }
}

named_enum! {
    /// Semantic font slots.
    pub enum FontKind: "font kind" {
        SystemFont,
        MenuFont,
        MenuBarFont,
        MenuItemFont,
        MessageBoxFont,
        LabelFont,
        TipLabelFont,
        StatusBarFont,
        TitleBarFont,
        MdiSubWindowTitleFont,
        DockWidgetTitleFont,
        PushButtonFont,
        CheckBoxFont,
        RadioButtonFont,
        ToolButtonFont,
        ItemViewFont,
        ListViewFont,
        HeaderViewFont,
        ListBoxFont,
        ComboMenuItemFont,
        ComboLineEditFont,
        SmallFont,
        MiniFont,
        FixedFont,
        GroupBoxTitleFont,
        TabButtonFont,
        EditorFont,
    }
}

named_enum! {
    /// Standard icons a style may ask the native theme for.
    pub enum StandardPixmap: "standard pixmap" {
        TitleBarMenuButton,
        TitleBarMinButton,
        TitleBarMaxButton,
        TitleBarCloseButton,
        TitleBarNormalButton,
        TitleBarShadeButton,
        TitleBarUnshadeButton,
        TitleBarContextHelpButton,
        DockWidgetCloseButton,
        MessageBoxInformation,
        MessageBoxWarning,
        MessageBoxCritical,
        MessageBoxQuestion,
        DesktopIcon,
        TrashIcon,
        ComputerIcon,
        DriveFDIcon,
        DriveHDIcon,
        DriveCDIcon,
        DriveDVDIcon,
        DriveNetIcon,
        DirOpenIcon,
        DirClosedIcon,
        DirLinkIcon,
        DirLinkOpenIcon,
        FileIcon,
        FileLinkIcon,
        ToolBarHorizontalExtensionButton,
        ToolBarVerticalExtensionButton,
        FileDialogStart,
        FileDialogEnd,
        FileDialogToParent,
        FileDialogNewFolder,
        FileDialogDetailedView,
        FileDialogInfoView,
        FileDialogContentsView,
        FileDialogListView,
        FileDialogBack,
        DirIcon,
        DialogOkButton,
        DialogCancelButton,
        DialogHelpButton,
        DialogOpenButton,
        DialogSaveButton,
        DialogCloseButton,
        DialogApplyButton,
        DialogResetButton,
        DialogDiscardButton,
        DialogYesButton,
        DialogNoButton,
        ArrowUp,
        ArrowDown,
        ArrowLeft,
        ArrowRight,
        ArrowBack,
        ArrowForward,
        DirHomeIcon,
        CommandLink,
        VistaShield,
        BrowserReload,
        BrowserStop,
        MediaPlay,
        MediaStop,
        MediaPause,
        MediaSkipForward,
        MediaSkipBackward,
        MediaSeekForward,
        MediaSeekBackward,
        MediaVolume,
        MediaVolumeMuted,
        LineEditClearButton,
        DialogYesToAllButton,
        DialogNoToAllButton,
        DialogSaveAllButton,
        DialogAbortButton,
        DialogRetryButton,
        DialogIgnoreButton,
        RestoreDefaultsButton,
        TabCloseButton,
    }
}
