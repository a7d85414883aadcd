//! Plan generation: calendar, expansion, overload and weight corrections.

pub mod calendar;
pub mod paradigm;
pub mod plan;
pub mod progression;
pub mod table;
pub mod types;

pub use calendar::{training_dates, TrainingDays};
pub use paradigm::Paradigm;
pub use plan::TrainingPlan;
pub use table::render_table;
pub use types::{PlanError, ScheduleRow};
