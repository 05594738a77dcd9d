//! # Door LUT
//!
//! 门铰链阻力查找表（Look-Up Table）
//!
//! ## 模块
//!
//! - `table`: `ForceTable`，181 个整数角度（0°..=180°）上的阻力采样
//! - `tables`: 内置的全部力曲线（`FORCE_TABLES`）
//! - `selector`: 根据 `(benchmark_type, door_opening_side)` 选表，缓存上一次的组合
//! - `interpolate`: 按当前铰链角度线性插值并附加方向符号
//!
//! ## 数据流
//!
//! ```text
//! (benchmark_type, door_opening_side)
//!     ↓ TableSelector::select()
//! &'static ForceTable
//!     ↓ interpolate(table, angle, side)
//! f32 阻力
//! ```
//!
//! ## 示例
//!
//! ```rust
//! use door_lut::{TableSelector, interpolate};
//! use door_protocol::{Deg, RotationDirection};
//!
//! let mut selector = TableSelector::new();
//! let selection = selector.select("Constant Force", "CW");
//! let table = selection.table.unwrap();
//!
//! let force = interpolate(table, Deg(45.0), Some(RotationDirection::Clockwise));
//! assert_eq!(force, -(table[45] as f32));
//! ```

pub mod interpolate;
pub mod selector;
pub mod table;
pub mod tables;

// 重新导出常用类型
pub use interpolate::interpolate;
pub use selector::{Selection, SelectionKey, TableSelector};
pub use table::{ForceTable, TABLE_LEN};
pub use tables::{DirectionalTables, FORCE_TABLES, ForceTableSet};
