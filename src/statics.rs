// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

// External links
pub const GITHUB_URL: &str = "https://github.com/staehle/quiltkeeper";

// Fixed names for the persisted store and exported backups.
pub const STORE_DIR: &str = ".quiltkeeper";
pub const STORE_FILE: &str = "projects.json";
pub const EXPORT_PREFIX: &str = "quiltkeeper";

// Date rendering for people (the wire format stays ISO).
pub const DISPLAY_DATE_FMT: &str = "%B %-d, %Y";

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "QuiltKeeper";

pub const EN_TAB_GALLERY: &str = "Gallery";
pub const EN_TAB_FAVORITES: &str = "Favorites";
pub const EN_TAB_CHARITY: &str = "Charity";
pub const EN_TAB_ADMIN: &str = "Manage";

pub const EN_BTN_NEW_PROJECT: &str = "Add Quilt Project";
pub const EN_BTN_EXPORT: &str = "Export Backup...";
pub const EN_BTN_IMPORT: &str = "Import Backup...";
pub const EN_BTN_ABOUT: &str = "About";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";

pub const EN_WINDOW_ABOUT: &str = "About";
pub const EN_ABOUT_HEADING: &str = "QuiltKeeper";
pub const EN_ABOUT_VERSION: &str = "Version:";
pub const EN_ABOUT_BLURB: &str = "Track quilt projects, favorites, and charity quilts.";
pub const EN_PROJECT_REPO: &str = "GitHub Repo";

pub const EN_FILTER_ALL: &str = "All";
pub const EN_CATEGORY_UPCOMING: &str = "Upcoming";
pub const EN_CATEGORY_IN_PROGRESS: &str = "In Progress";
pub const EN_CATEGORY_COMPLETED: &str = "Completed";
pub const EN_TAG_CHARITY: &str = "Charity";

pub const EN_EMPTY_GALLERY: &str = "No quilt projects yet. Add your first one!";
pub const EN_EMPTY_FAVORITES: &str = "No favorite quilts yet. Tap the star on a project.";
pub const EN_EMPTY_CHARITY: &str = "No charity quilts yet.";
pub const EN_EMPTY_ADMIN: &str = "No projects to show.";

pub const EN_GLYPH_FAVORITE_ON: &str = "\u{2605}";
pub const EN_GLYPH_FAVORITE_OFF: &str = "\u{2606}";
pub const EN_BTN_FAVORITE: &str = "Favorite";
pub const EN_BTN_UNFAVORITE: &str = "Unfavorite";
pub const EN_BTN_EDIT: &str = "Edit";
pub const EN_BTN_DELETE: &str = "Delete";
pub const EN_BTN_CANCEL: &str = "Cancel";
pub const EN_BTN_CLOSE: &str = "Close";
pub const EN_BTN_CLEAR: &str = "Clear";
pub const EN_BTN_DETAILS: &str = "Details";

pub const EN_COL_PHOTO: &str = "Photo";
pub const EN_COL_TITLE: &str = "Title";
pub const EN_COL_STATUS: &str = "Status";
pub const EN_COL_DUE: &str = "Due";
pub const EN_COL_ACTIONS: &str = "Actions";

pub const EN_EDITOR_HEADING_ADD: &str = "Add Quilt Project";
pub const EN_EDITOR_HEADING_EDIT: &str = "Edit Quilt Project";
pub const EN_LABEL_TITLE: &str = "Title:";
pub const EN_LABEL_CATEGORY: &str = "Status:";
pub const EN_LABEL_NOTES: &str = "Notes:";
pub const EN_LABEL_DEADLINE: &str = "Due date:";
pub const EN_LABEL_COMPLETED_DATE: &str = "Completed date:";
pub const EN_LABEL_CHARITY: &str = "Charity quilt";
pub const EN_LABEL_FAVORITE: &str = "Favorite";
pub const EN_LABEL_PHOTO: &str = "Photo:";
pub const EN_HINT_DATE: &str = "YYYY-MM-DD";
pub const EN_BTN_SAVE_PROJECT: &str = "Save Project";
pub const EN_BTN_CHOOSE_PHOTO: &str = "Choose Photo...";
pub const EN_BTN_REMOVE_PHOTO: &str = "Remove Photo";
pub const EN_PHOTO_NONE: &str = "No photo";

pub const EN_WINDOW_DETAILS: &str = "Project Details";
pub const EN_DETAIL_DESCRIPTION: &str = "Description:";
pub const EN_DETAIL_DUE: &str = "Due Date:";
pub const EN_DETAIL_COMPLETED: &str = "Completed Date:";
pub const EN_DETAIL_ADDED: &str = "Added:";
pub const EN_DETAIL_FAVORITE: &str = "Favorite:";
pub const EN_DETAIL_CHARITY: &str = "Charity Quilt:";
pub const EN_DETAIL_YES: &str = "Yes";

pub const EN_WINDOW_CONFIRM_DELETE: &str = "Delete Project";
pub const EN_CONFIRM_DELETE_TAIL: &str = "This cannot be undone.";

pub const EN_PREFIX_DUE: &str = "Due:";

pub const EN_MSG_DELETED: &str = "Quilt deleted successfully!";
pub const EN_MSG_BACKUP_SAVED: &str = "Backup saved successfully.";

pub const EN_ERR_TITLE_REQUIRED: &str = "Please enter a project name before saving.";
pub const EN_ERR_COMPLETED_FUTURE_DEADLINE: &str =
    "Completed projects cannot have a future due date. Update the due date or status to continue.";
pub const EN_ERR_BAD_DEADLINE: &str = "The due date must look like 2025-06-01.";
pub const EN_ERR_BAD_COMPLETED_DATE: &str = "The completed date must look like 2025-06-01.";

// File dialog filters.
pub const EN_DIALOG_BACKUP_FILTER: &str = "Quilt backup";
pub const BACKUP_EXTENSIONS: [&str; 1] = ["json"];
pub const EN_DIALOG_IMAGE_FILTER: &str = "Images";
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];
