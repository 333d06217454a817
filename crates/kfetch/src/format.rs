//! 报告渲染
//!
//! 报告固定为 [`LOGO_ROWS`] 行。第 `i` 行由 `LOGO[i]` 与第 `i` 条信息行拼接而成，
//! 信息行依次为：主机名、分隔线，以及按固定顺序排列的被选中字段；
//! 信息行不足 8 条时，剩余的行只有 logo。

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use uapi::kfetch::{InfoMask, KFETCH_BUF_SIZE};

use crate::config::{INFO_FIELD_CAP, LOGO_ROWS, LOGO_WIDTH};
use crate::snapshot::SystemSnapshot;

/// 企鹅 logo，每行 [`LOGO_WIDTH`] 个字符
pub const LOGO: [&str; LOGO_ROWS] = [
    "                    ",
    "        .-.         ",
    "       (.. |        ",
    "       <>  |        ",
    "      / --- \\       ",
    "     ( |   | |      ",
    "   |\\\\_)___/\\)/\\    ",
    "  <__)------(__/    ",
];

const _: () = {
    let mut i = 0;
    while i < LOGO_ROWS {
        assert!(LOGO[i].len() == LOGO_WIDTH);
        i += 1;
    }
};

/// 不超过 `max` 的最大字符边界
fn floor_char_boundary(s: &str, max: usize) -> usize {
    if max >= s.len() {
        return s.len();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// 一条信息行
///
/// 最多 [`INFO_FIELD_CAP`] 字节，超出的部分在字符边界处丢弃。
/// 控制字符被替换为 `?`，因此一行信息永远不会跨行。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoLine {
    text: String,
    truncated: bool,
}

impl InfoLine {
    /// 创建空行
    pub fn new() -> Self {
        Self::default()
    }

    /// 按格式参数生成一行
    pub fn format(args: fmt::Arguments<'_>) -> Self {
        let mut line = Self::new();
        line.write_fmt(args).ok();
        line
    }

    /// 行内容
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// 是否发生过截断
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl Write for InfoLine {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        for c in s.chars() {
            // 控制字符（包括换行）会破坏固定的 8 行布局
            let c = if c.is_control() { '?' } else { c };
            if self.text.len() + c.len_utf8() > INFO_FIELD_CAP {
                self.truncated = true;
                break;
            }
            self.text.push(c);
        }
        Ok(())
    }
}

type FieldFormatter = fn(&SystemSnapshot) -> InfoLine;

/// 可选字段，按报告中的顺序排列
static FIELDS: [(InfoMask, FieldFormatter); 6] = [
    (InfoMask::RELEASE, |s| {
        InfoLine::format(format_args!("Kernel:   {}", s.release))
    }),
    (InfoMask::CPU_MODEL, |s| {
        InfoLine::format(format_args!("CPU:      {}", s.cpu_model))
    }),
    (InfoMask::NUM_CPUS, |s| {
        InfoLine::format(format_args!("CPUs:     {} / {}", s.online_cpus, s.present_cpus))
    }),
    (InfoMask::MEM, |s| {
        InfoLine::format(format_args!(
            "Mem:      {} MB / {} MB",
            s.free_mem_mb, s.total_mem_mb
        ))
    }),
    (InfoMask::NUM_PROCS, |s| {
        InfoLine::format(format_args!("Procs:    {}", s.num_procs))
    }),
    (InfoMask::UPTIME, |s| {
        InfoLine::format(format_args!("Uptime:   {} mins", s.uptime_mins))
    }),
];

/// 报告渲染器
///
/// 纯函数：相同的快照和掩码总是得到逐字节相同的输出。
pub struct ReportFormatter;

impl ReportFormatter {
    /// 生成信息行：主机名、分隔线，再加上 `mask` 中被选中的字段
    ///
    /// 未定义的位被忽略。
    pub fn info_lines(snapshot: &SystemSnapshot, mask: i32) -> Vec<InfoLine> {
        let selected = InfoMask::from_bits_truncate(mask);

        let hostname = InfoLine::format(format_args!("{}", snapshot.hostname));
        let width = hostname.as_str().chars().count();
        let divider = InfoLine::format(format_args!("{}", "-".repeat(width)));

        let mut lines = Vec::with_capacity(LOGO_ROWS);
        lines.push(hostname);
        lines.push(divider);
        lines.extend(
            FIELDS
                .iter()
                .filter(|(flag, _)| selected.contains(*flag))
                .map(|(_, render)| render(snapshot)),
        );
        lines
    }

    /// 渲染完整报告，不超过 [`KFETCH_BUF_SIZE`] 字节
    pub fn render(snapshot: &SystemSnapshot, mask: i32) -> Vec<u8> {
        let info = Self::info_lines(snapshot, mask);
        compose(&info, KFETCH_BUF_SIZE).into_bytes()
    }
}

/// 把 logo 与信息行逐行拼接，用换行符连接，结果超过 `cap` 字节时从末尾截断
pub(crate) fn compose(info: &[InfoLine], cap: usize) -> String {
    let mut out = String::with_capacity(cap);
    for (i, row) in LOGO.iter().enumerate() {
        if i != 0 {
            out.push('\n');
        }
        out.push_str(row);
        if let Some(line) = info.get(i) {
            out.push_str(line.as_str());
        }
    }

    if out.len() > cap {
        log::warn!("kfetch: report is {} bytes, truncated to {}", out.len(), cap);
        let end = floor_char_boundary(&out, cap);
        out.truncate(end);
    }
    out
}
