//! API endpoint modules.

mod packet;
mod query;
mod random;
mod report;
mod rooms;
mod sets;

pub use packet::PacketApi;
pub use query::QueryRequestBuilder;
pub use random::{RandomApi, RandomBonusBuilder, RandomTossupBuilder};
pub use report::ReportApi;
pub use rooms::RoomApi;
pub use sets::SetApi;

use qbreader_core::{QbError, Result};

/// Validate wire records into domain records, failing on the first bad one
pub(crate) fn validate<R, T>(records: Vec<R>) -> Result<Vec<T>>
where
    T: TryFrom<R, Error = QbError>,
{
    records.into_iter().map(T::try_from).collect()
}

/// Join filter values the way the API expects list parameters
pub(crate) fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
