pub use anyhow::{Context, Result};
pub use itertools::Itertools;
pub use tracing::{debug, info, warn};

///////////////////////////////////////////////////////////////////////////////
////
//// * workspace
////
///////////////////////////////////////////////////////////////////////////////
pub use common::{
    parse_offset, resolve, total_distance_with, CalendarDate, InputError,
    LengthPolicy, NumericCode,
};
pub use task_runner::{nth_line, read_lines, Reader, Solver};

///////////////////////////////////////////////////////////////////////////////
////
//// * stdlib
////
///////////////////////////////////////////////////////////////////////////////
pub use std::fmt::{self, Display, Formatter};
