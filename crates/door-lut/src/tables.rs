//! 内置力曲线
//!
//! 每种基准力曲线一张表；`SuddenForce`、`SuddenRamp`、`WindRamp`
//! 按开门方向各有顺时针 / 逆时针两张表。单位：N。
//!
//! | 表 | 形状 |
//! |---|---|
//! | `NO_FORCE` | 全 0 |
//! | `CONSTANT_FORCE` | 全 15 |
//! | `SUDDEN_FORCE_CW` | 25°..=45° 为 40，其余 0 |
//! | `SUDDEN_FORCE_CCW` | 30°..=50° 为 35，其余 0 |
//! | `SUDDEN_RAMP_CW` | 20° 处跳到 20，线性增至 90° 的 60，之后保持 |
//! | `SUDDEN_RAMP_CCW` | 25° 处跳到 20，线性增至 95° 的 55，之后保持 |
//! | `WIND_RAMP_CW` | 0° 的 0 线性增至 90° 的 30，之后保持 |
//! | `WIND_RAMP_CCW` | 0° 的 0 线性增至 80° 的 25，之后保持 |

use crate::table::ForceTable;
use door_protocol::{BenchmarkProfile, RotationDirection};

pub const NO_FORCE: ForceTable = ForceTable::constant(0);
pub const CONSTANT_FORCE: ForceTable = ForceTable::constant(15);

pub const SUDDEN_FORCE_CW: ForceTable = ForceTable::step(25, 45, 40);
pub const SUDDEN_FORCE_CCW: ForceTable = ForceTable::step(30, 50, 35);

pub const SUDDEN_RAMP_CW: ForceTable = ForceTable::ramp(20, 90, 20, 60);
pub const SUDDEN_RAMP_CCW: ForceTable = ForceTable::ramp(25, 95, 20, 55);

pub const WIND_RAMP_CW: ForceTable = ForceTable::ramp(0, 90, 0, 30);
pub const WIND_RAMP_CCW: ForceTable = ForceTable::ramp(0, 80, 0, 25);

/// 进程级只读表集合，多线程共享无需加锁
pub static FORCE_TABLES: ForceTableSet = ForceTableSet::builtin();

/// 按方向区分的一组表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionalTables {
    pub cw: ForceTable,
    pub ccw: ForceTable,
}

impl DirectionalTables {
    #[inline]
    pub fn get(&self, direction: RotationDirection) -> &ForceTable {
        match direction {
            RotationDirection::Clockwise => &self.cw,
            RotationDirection::CounterClockwise => &self.ccw,
        }
    }
}

/// 全部力曲线表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForceTableSet {
    pub no_force: ForceTable,
    pub constant_force: ForceTable,
    pub sudden_force: DirectionalTables,
    pub sudden_ramp: DirectionalTables,
    pub wind_ramp: DirectionalTables,
}

impl ForceTableSet {
    /// 内置表集合
    pub const fn builtin() -> Self {
        Self {
            no_force: NO_FORCE,
            constant_force: CONSTANT_FORCE,
            sudden_force: DirectionalTables {
                cw: SUDDEN_FORCE_CW,
                ccw: SUDDEN_FORCE_CCW,
            },
            sudden_ramp: DirectionalTables {
                cw: SUDDEN_RAMP_CW,
                ccw: SUDDEN_RAMP_CCW,
            },
            wind_ramp: DirectionalTables {
                cw: WIND_RAMP_CW,
                ccw: WIND_RAMP_CCW,
            },
        }
    }

    /// 查表（无缓存）
    ///
    /// 不区分方向的力曲线忽略 `direction`。
    pub fn table(&self, profile: BenchmarkProfile, direction: RotationDirection) -> &ForceTable {
        match profile {
            BenchmarkProfile::NoForce => &self.no_force,
            BenchmarkProfile::ConstantForce => &self.constant_force,
            BenchmarkProfile::SuddenForce => self.sudden_force.get(direction),
            BenchmarkProfile::SuddenRamp => self.sudden_ramp.get(direction),
            BenchmarkProfile::WindRamp => self.wind_ramp.get(direction),
        }
    }

    /// 遍历全部表：`(profile, direction, table)`
    ///
    /// 不区分方向的表 `direction` 为 `None`。
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (BenchmarkProfile, Option<RotationDirection>, &ForceTable)> {
        static DIRECTIONS: [RotationDirection; 2] = [
            RotationDirection::Clockwise,
            RotationDirection::CounterClockwise,
        ];

        BenchmarkProfile::ALL.into_iter().flat_map(move |profile| {
            let directions: &'static [RotationDirection] = if profile.is_directional() {
                &DIRECTIONS
            } else {
                &DIRECTIONS[..1]
            };
            directions.iter().map(move |&direction| {
                let label = profile.is_directional().then_some(direction);
                (profile, label, self.table(profile, direction))
            })
        })
    }
}

impl Default for ForceTableSet {
    fn default() -> Self {
        Self::builtin()
    }
}
