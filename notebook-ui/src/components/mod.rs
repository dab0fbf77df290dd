//! File list components

pub mod button;
pub mod dropdown;
pub mod file_actions_menu;
pub mod files_list;
pub mod icons;
pub mod menu;
pub mod small_attention_block;

pub use button::ChromelessButton;
pub use dropdown::Dropdown;
pub use file_actions_menu::FileActionsMenu;
pub use files_list::FilesListView;
pub use icons::{DownloadIcon, EllipsisIcon, FileIcon, TrashIcon};
pub use menu::{MenuDropdown, MenuItem, MenuLinkItem};
pub use small_attention_block::SmallAttentionBlock;
