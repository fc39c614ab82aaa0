#![forbid(unsafe_code)]

//! Standard pixmap to stock-icon mapping.
//!
//! The match lists every [`StandardPixmap`] explicitly so a new variant does
//! not compile until it is mapped or deliberately left unmapped.

use gtkpal_core::StandardPixmap;

/// Stock-icon identifier for `kind`, `None` when the toolkit has no
/// counterpart.
#[must_use]
pub const fn stock_icon_name(kind: StandardPixmap) -> Option<&'static str> {
    use StandardPixmap as P;

    match kind {
        P::DialogOkButton => Some("gtk-ok"),
        P::DialogCancelButton => Some("gtk-cancel"),
        P::DialogYesButton => Some("gtk-yes"),
        P::DialogNoButton => Some("gtk-no"),
        P::DialogOpenButton => Some("gtk-open"),
        P::DialogCloseButton => Some("gtk-close"),
        P::DialogApplyButton => Some("gtk-apply"),
        P::DialogSaveButton => Some("gtk-save"),
        P::DialogDiscardButton => Some("gtk-delete"),
        P::MessageBoxWarning => Some("gtk-dialog-warning"),
        P::MessageBoxQuestion => Some("gtk-dialog-question"),
        P::MessageBoxInformation => Some("gtk-dialog-info"),
        P::MessageBoxCritical => Some("gtk-dialog-error"),

        P::TitleBarMenuButton
        | P::TitleBarMinButton
        | P::TitleBarMaxButton
        | P::TitleBarCloseButton
        | P::TitleBarNormalButton
        | P::TitleBarShadeButton
        | P::TitleBarUnshadeButton
        | P::TitleBarContextHelpButton
        | P::DockWidgetCloseButton
        | P::DesktopIcon
        | P::TrashIcon
        | P::ComputerIcon
        | P::DriveFDIcon
        | P::DriveHDIcon
        | P::DriveCDIcon
        | P::DriveDVDIcon
        | P::DriveNetIcon
        | P::DirOpenIcon
        | P::DirClosedIcon
        | P::DirLinkIcon
        | P::DirLinkOpenIcon
        | P::FileIcon
        | P::FileLinkIcon
        | P::ToolBarHorizontalExtensionButton
        | P::ToolBarVerticalExtensionButton
        | P::FileDialogStart
        | P::FileDialogEnd
        | P::FileDialogToParent
        | P::FileDialogNewFolder
        | P::FileDialogDetailedView
        | P::FileDialogInfoView
        | P::FileDialogContentsView
        | P::FileDialogListView
        | P::FileDialogBack
        | P::DirIcon
        | P::DialogHelpButton
        | P::DialogResetButton
        | P::ArrowUp
        | P::ArrowDown
        | P::ArrowLeft
        | P::ArrowRight
        | P::ArrowBack
        | P::ArrowForward
        | P::DirHomeIcon
        | P::CommandLink
        | P::VistaShield
        | P::BrowserReload
        | P::BrowserStop
        | P::MediaPlay
        | P::MediaStop
        | P::MediaPause
        | P::MediaSkipForward
        | P::MediaSkipBackward
        | P::MediaSeekForward
        | P::MediaSeekBackward
        | P::MediaVolume
        | P::MediaVolumeMuted
        | P::LineEditClearButton
        | P::DialogYesToAllButton
        | P::DialogNoToAllButton
        | P::DialogSaveAllButton
        | P::DialogAbortButton
        | P::DialogRetryButton
        | P::DialogIgnoreButton
        | P::RestoreDefaultsButton
        | P::TabCloseButton => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_buttons_map_to_stock_ids() {
        assert_eq!(stock_icon_name(StandardPixmap::DialogOkButton), Some("gtk-ok"));
        assert_eq!(
            stock_icon_name(StandardPixmap::DialogDiscardButton),
            Some("gtk-delete")
        );
        assert_eq!(
            stock_icon_name(StandardPixmap::MessageBoxCritical),
            Some("gtk-dialog-error")
        );
    }

    #[test]
    fn exactly_thirteen_kinds_are_mapped() {
        let mapped = StandardPixmap::ALL
            .iter()
            .filter(|k| stock_icon_name(**k).is_some())
            .count();
        assert_eq!(mapped, 13);
        assert_eq!(stock_icon_name(StandardPixmap::TabCloseButton), None);
    }
}
