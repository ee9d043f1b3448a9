//! src/view/mod.rs
//! View 层：只读 Model，渲染一帧
//!
//!     ┌────────────────────────────────────────────────────────────┐
//!     │ logo   Tailscale Status: [Connected]          tsui:      … │  header
//!     │        me@example.com                         tailscale: … │
//!     │        Traffic: 1.2 MB                                     │
//!     ├────────────────────────────────────────────────────────────┤
//!     │        Warning: Locked Out（仅被 tailnet lock 锁定时）     │
//!     ├────────────────────────────────────────────────────────────┤
//!     │ This Device     …  >  │  submenu                           │  Running
//!     │ Exit Nodes      …  >  │                                    │
//!     │ Settings           >  │                                    │
//!     │                                                            │
//!     │            或：按后端状态居中显示的横幅                     │  其他状态
//!     ├────────────────────────────────────────────────────────────┤
//!     │                   Error: / Tip! 状态栏                     │
//!     └────────────────────────────────────────────────────────────┘
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局
//!         mod components;     // header / menu / banner / statusbar
//!         pub mod theme;      // 颜色与样式

mod components;
mod layout;
pub mod theme;

pub use layout::render;
