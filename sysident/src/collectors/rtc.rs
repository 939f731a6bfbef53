use std::io::Write;

use super::os::{self, KernelSeries};
use super::{emit_matches, read_proc, ScanField};
use crate::error::IdentError;

/// 2.2 kernels expose the clock at /proc/rtc, 2.3 kernels moved it
/// under /proc/driver.
pub const RTC_PATH_V2_2: &str = "/proc/rtc";
pub const RTC_PATH_V2_3: &str = "/proc/driver/rtc";

const RTC_FIELDS: [ScanField; 4] = [
    ScanField {
        prefix: "rtc_time",
        token: 2,
        before: "RTC Current Time: ",
        after: "\t",
    },
    ScanField {
        prefix: "rtc_date",
        token: 2,
        before: "RTC Date: ",
        after: "\n",
    },
    ScanField {
        prefix: "periodic_freq",
        token: 2,
        before: "RTC Periodic Frequency: ",
        after: "\t",
    },
    ScanField {
        prefix: "batt_status",
        token: 2,
        before: "RTC Battery Status: ",
        after: "\n",
    },
];

pub fn rtc_path(series: KernelSeries) -> Result<&'static str, IdentError> {
    match series {
        KernelSeries::V2_2 => Ok(RTC_PATH_V2_2),
        KernelSeries::V2_3 => Ok(RTC_PATH_V2_3),
        KernelSeries::Other | KernelSeries::Unreadable => Err(IdentError::UnknownKernelSeries),
    }
}

pub fn report<W: Write>(out: &mut W) -> Result<(), IdentError> {
    let path = rtc_path(os::kernel_series()?)?;
    let content = read_proc(path)?;
    emit_matches(out, &content, &RTC_FIELDS)?;
    Ok(())
}
