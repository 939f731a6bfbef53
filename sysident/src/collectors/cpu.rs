use std::io::Write;

use super::{emit_matches, read_proc, ScanField};
use crate::error::IdentError;

pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Recognized /proc/cpuinfo prefixes, checked in this order per line.
/// Token indices count the whitespace split of the whole line, so the
/// `:` separator occupies an index of its own.
const CPU_FIELDS: [ScanField; 6] = [
    ScanField {
        prefix: "processor",
        token: 2,
        before: "CPU ",
        after: "",
    },
    ScanField {
        prefix: "vendor_id",
        token: 2,
        before: " is Processor Type: ",
        after: " ",
    },
    ScanField {
        prefix: "model name",
        token: 3,
        before: " ",
        after: "\n",
    },
    ScanField {
        prefix: "cpu MHz",
        token: 3,
        before: "Processor Speed in MHz: ",
        after: "\n",
    },
    ScanField {
        prefix: "cache size",
        token: 3,
        before: "Processor Cache Size: ",
        after: "\n",
    },
    ScanField {
        prefix: "bogomips",
        token: 2,
        before: "Processor Speed in Bogomips: ",
        after: "\n",
    },
];

pub fn report<W: Write>(out: &mut W) -> Result<(), IdentError> {
    let content = read_proc(CPUINFO_PATH)?;
    emit_matches(out, &content, &CPU_FIELDS)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 142
model name\t: Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz
cpu MHz\t\t: 1800.000
cache size\t: 8192 KB
bogomips\t: 3984.00
";

    fn emit(content: &str) -> String {
        let mut out = Vec::new();
        emit_matches(&mut out, content, &CPU_FIELDS).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_recognized_fields_in_file_order() {
        assert_eq!(
            emit(SAMPLE),
            "CPU 0 is Processor Type: GenuineIntel  Intel(R)\n\
             Processor Speed in MHz: 1800.000\n\
             Processor Cache Size: 8192\n\
             Processor Speed in Bogomips: 3984.00\n"
        );
    }

    #[test]
    fn bare_model_line_is_not_model_name() {
        assert_eq!(emit("model\t\t: 142\n"), "");
    }

    #[test]
    fn cache_size_drops_the_unit_suffix() {
        assert_eq!(emit("cache size\t: 512 KB\n"), "Processor Cache Size: 512\n");
    }

    #[test]
    fn order_mirrors_input_not_table() {
        let reordered = "bogomips\t: 3984.00\nprocessor\t: 1\n";
        assert_eq!(emit(reordered), "Processor Speed in Bogomips: 3984.00\nCPU 1");
    }
}
