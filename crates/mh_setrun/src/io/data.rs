// crates/mh_setrun/src/io/data.rs

//! `.data` 行格式
//!
//! ```text
//! # 注释 / 文件头
//! 93.0 28.0            =: lower
//! 'mega_fill.txt'
//! 3 1 5 0.0 10000000000.0
//! ```
//!
//! 带名称的字段为 `值 =: 名称`，值列左对齐填充到 20 列；
//! 无名称的行是数据行（区域、测站、文件路径等）。
//! 逻辑值写作 `T` / `F`，字符串用单引号，实数写成能精确读回同一 `f64` 的最短形式。

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{SetrunError, SetrunResult};

const VALUE_WIDTH: usize = 20;
const SEPARATOR: &str = "=:";

/// 格式化实数
///
/// 整数值保留一位小数（`226800.0`），极大或极小的值用指数形式（`1e99`、`1e-5`），
/// 其余用最短的可精确读回形式。
pub fn format_real(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        "0.0".to_string()
    } else if !(1e-4..1e15).contains(&magnitude) {
        format!("{value:e}")
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// 可写成 `.data` 值的类型
pub trait DataValue {
    /// 值列文本
    fn render(&self) -> String;
}

impl DataValue for f64 {
    fn render(&self) -> String {
        format_real(*self)
    }
}

macro_rules! int_value {
    ($($t:ty),*) => {
        $(impl DataValue for $t {
            fn render(&self) -> String {
                self.to_string()
            }
        })*
    };
}

int_value!(u8, u32, u64, i64, usize);

impl DataValue for bool {
    fn render(&self) -> String {
        if *self { "T" } else { "F" }.to_string()
    }
}

impl DataValue for str {
    fn render(&self) -> String {
        // 内嵌单引号写成两个
        format!("'{}'", self.replace('\'', "''"))
    }
}

impl DataValue for String {
    fn render(&self) -> String {
        self.as_str().render()
    }
}

impl DataValue for Path {
    fn render(&self) -> String {
        self.to_string_lossy().render()
    }
}

impl DataValue for PathBuf {
    fn render(&self) -> String {
        self.as_path().render()
    }
}

impl<T: DataValue> DataValue for [T] {
    fn render(&self) -> String {
        self.iter().map(DataValue::render).collect::<Vec<_>>().join(" ")
    }
}

impl<T: DataValue> DataValue for Vec<T> {
    fn render(&self) -> String {
        self.as_slice().render()
    }
}

impl<T: DataValue, const N: usize> DataValue for [T; N] {
    fn render(&self) -> String {
        self.as_slice().render()
    }
}

/// 逐行构建一个 `.data` 文件
#[derive(Debug, Clone)]
pub struct DataWriter {
    buf: String,
}

impl DataWriter {
    /// 写入文件头
    pub fn new(file_name: &str) -> Self {
        let mut buf = String::new();
        buf.push_str("########################################################\n");
        buf.push_str("### generated by mh_setrun, do not edit by hand    ####\n");
        buf.push_str(&format!("### {file_name:<49}####\n"));
        buf.push_str("########################################################\n\n");
        Self { buf }
    }

    /// 带名称的字段
    pub fn field<V: DataValue + ?Sized>(&mut self, name: &str, value: &V) -> &mut Self {
        let rendered = value.render();
        self.buf
            .push_str(&format!("{rendered:<VALUE_WIDTH$} {SEPARATOR} {name}\n"));
        self
    }

    /// 无名称的数据行
    pub fn row(&mut self, tokens: &[String]) -> &mut Self {
        self.buf.push_str(&tokens.join(" "));
        self.buf.push('\n');
        self
    }

    /// 空行
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// 文件内容
    pub fn finish(self) -> String {
        self.buf
    }
}

/// 可从单个记号解析的类型
pub trait FromToken: Sized {
    /// 解析失败返回 `None`
    fn from_token(token: &str) -> Option<Self>;
}

macro_rules! parse_token {
    ($($t:ty),*) => {
        $(impl FromToken for $t {
            fn from_token(token: &str) -> Option<Self> {
                <$t as FromStr>::from_str(token).ok()
            }
        })*
    };
}

parse_token!(u8, u32, u64, i64, usize);

impl FromToken for f64 {
    fn from_token(token: &str) -> Option<Self> {
        // Fortran 双精度指数 1.0d-3
        token.replace(|c: char| c == 'd' || c == 'D', "e").parse().ok()
    }
}

impl FromToken for bool {
    fn from_token(token: &str) -> Option<Self> {
        match token.trim_matches('.').to_ascii_uppercase().as_str() {
            "T" | "TRUE" | "1" => Some(true),
            "F" | "FALSE" | "0" => Some(false),
            _ => None,
        }
    }
}

impl FromToken for String {
    fn from_token(token: &str) -> Option<Self> {
        Some(token.to_string())
    }
}

impl FromToken for PathBuf {
    fn from_token(token: &str) -> Option<Self> {
        Some(PathBuf::from(token))
    }
}

/// 在引号外的第一个 `=:` 处拆成值列与字段名
fn split_field(line: &str) -> (&str, Option<String>) {
    let mut quote = None;
    for (i, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if line[i..].starts_with(SEPARATOR) => {
                let name = line[i + SEPARATOR.len()..].trim().to_string();
                return (&line[..i], Some(name));
            }
            None => {}
        }
    }
    (line, None)
}

/// 拆分值列，单引号或双引号内的空白不作分隔，连续两个引号表示引号本身
fn tokenize(text: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '\'' || c == '"' {
            chars.next();
            let mut token = String::new();
            loop {
                match chars.next() {
                    Some(q) if q == c && chars.peek() == Some(&c) => {
                        chars.next();
                        token.push(c);
                    }
                    Some(q) if q == c => break,
                    Some(ch) => token.push(ch),
                    None => return Err(format!("引号未闭合: {text}")),
                }
            }
            tokens.push(token);
        } else {
            let mut token = String::new();
            while let Some(&ch) = chars.peek() {
                if ch.is_whitespace() {
                    break;
                }
                token.push(ch);
                chars.next();
            }
            tokens.push(token);
        }
    }
    Ok(tokens)
}

/// 读入的一行
#[derive(Debug, Clone, PartialEq)]
pub struct DataLine {
    file: String,
    number: usize,
    tokens: Vec<String>,
    name: Option<String>,
}

impl DataLine {
    /// 行号（从 1 开始）
    pub fn number(&self) -> usize {
        self.number
    }

    /// 字段名（数据行为 `None`）
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// 值记号个数
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// 是否没有值
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn error(&self, message: impl Into<String>) -> SetrunError {
        SetrunError::Parse {
            file: self.file.clone(),
            line: self.number,
            message: message.into(),
        }
    }

    /// 第 `index` 个记号
    pub fn get<T: FromToken>(&self, index: usize) -> SetrunResult<T> {
        let token = self
            .tokens
            .get(index)
            .ok_or_else(|| self.error(format!("缺少第 {} 个值", index + 1)))?;
        T::from_token(token).ok_or_else(|| {
            self.error(format!(
                "无法解析 '{}' 为 {}",
                token,
                std::any::type_name::<T>()
            ))
        })
    }

    /// 全部记号
    pub fn all<T: FromToken>(&self) -> SetrunResult<Vec<T>> {
        (0..self.tokens.len()).map(|i| self.get(i)).collect()
    }

    /// 要求恰好 `n` 个记号
    pub fn expect_len(&self, n: usize) -> SetrunResult<&Self> {
        if self.tokens.len() == n {
            Ok(self)
        } else {
            Err(self.error(format!("期望 {} 个值, 实际 {}", n, self.tokens.len())))
        }
    }
}

/// 顺序读取的 `.data` 文件
#[derive(Debug, Clone)]
pub struct DataFile {
    name: String,
    lines: Vec<DataLine>,
    cursor: usize,
}

impl DataFile {
    /// 打开并解析文件
    pub fn open(path: &Path) -> SetrunResult<Self> {
        let file = File::open(path).map_err(|source| SetrunError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_reader(&name, BufReader::new(file)).map_err(|e| match e {
            SetrunError::Read { source, .. } => SetrunError::Read {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// 从 reader 解析
    pub fn from_reader<R: BufRead>(name: &str, reader: R) -> SetrunResult<Self> {
        let mut lines = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| SetrunError::Read {
                path: PathBuf::from(name),
                source,
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (values, label) = split_field(trimmed);
            let tokens = tokenize(values).map_err(|message| SetrunError::Parse {
                file: name.to_string(),
                line: i + 1,
                message,
            })?;
            lines.push(DataLine {
                file: name.to_string(),
                number: i + 1,
                tokens,
                name: label,
            });
        }
        Ok(Self {
            name: name.to_string(),
            lines,
            cursor: 0,
        })
    }

    /// 从字符串解析
    pub fn parse(name: &str, text: &str) -> SetrunResult<Self> {
        Self::from_reader(name, text.as_bytes())
    }

    fn end_error(&self, expected: &str) -> SetrunError {
        SetrunError::Parse {
            file: self.name.clone(),
            line: self.lines.last().map_or(0, |l| l.number),
            message: format!("文件提前结束, 期望 {expected}"),
        }
    }

    fn next_line(&mut self, expected: &str) -> SetrunResult<&DataLine> {
        if self.cursor >= self.lines.len() {
            return Err(self.end_error(expected));
        }
        self.cursor += 1;
        Ok(&self.lines[self.cursor - 1])
    }

    /// 下一个名为 `name` 的字段行
    pub fn field(&mut self, name: &str) -> SetrunResult<&DataLine> {
        let line = self.next_line(name)?;
        match line.name() {
            Some(label) if label == name => Ok(line),
            Some(label) => Err(line.error(format!("期望字段 '{name}', 实际 '{label}'"))),
            None => Err(line.error(format!("期望字段 '{name}', 实际为数据行"))),
        }
    }

    /// 单值字段
    pub fn value<T: FromToken>(&mut self, name: &str) -> SetrunResult<T> {
        self.field(name)?.expect_len(1)?.get(0)
    }

    /// 列表字段
    pub fn values<T: FromToken>(&mut self, name: &str) -> SetrunResult<Vec<T>> {
        self.field(name)?.all()
    }

    /// 定长列表字段
    pub fn array<T: FromToken + Copy + Default, const N: usize>(&mut self, name: &str) -> SetrunResult<[T; N]> {
        let line = self.field(name)?.expect_len(N)?;
        let mut out = [T::default(); N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = line.get(i)?;
        }
        Ok(out)
    }

    /// 下一个数据行，要求恰好 `n` 个记号
    pub fn row(&mut self, n: usize) -> SetrunResult<&DataLine> {
        let line = self.next_line("数据行")?;
        if let Some(label) = line.name() {
            return Err(line.error(format!("期望数据行, 实际为字段 '{label}'")));
        }
        line.expect_len(n)
    }

    /// 尚未读取的行数
    pub fn remaining(&self) -> usize {
        self.lines.len() - self.cursor
    }

    /// 要求所有行都已读完
    pub fn finish(&self) -> SetrunResult<()> {
        match self.lines.get(self.cursor) {
            None => Ok(()),
            Some(line) => Err(line.error("多余的行")),
        }
    }

    /// 文件名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 以当前行构造解析错误
    pub fn error(&self, message: impl Into<String>) -> SetrunError {
        let line = self
            .cursor
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map_or(0, |l| l.number);
        SetrunError::Parse {
            file: self.name.clone(),
            line,
            message: message.into(),
        }
    }
}
