//! # 伪造数据生成模块
//!
//! 生成用户名、密码、信用卡号等伪造的敏感记录，用作外传模拟的载荷。
//! 所有字段都是随机编造的，不包含任何真实信息。

use rand::Rng;
use rand::distr::{Alphanumeric, SampleString};

/// 组成伪造用户名的常用名字。
const FIRST_NAMES: &[&str] = &[
    "alice", "bob", "carol", "david", "erin", "frank", "grace", "henry", "irene", "jack", "karen",
    "leo", "maria", "nathan", "olivia", "peter", "quinn", "rachel", "steve", "tina",
];

/// 组成伪造用户名的常用姓氏。
const LAST_NAMES: &[&str] = &[
    "smith", "johnson", "williams", "brown", "jones", "garcia", "miller", "davis", "rodriguez",
    "martinez", "wilson", "anderson", "taylor", "thomas", "moore", "lee",
];

/// 信用卡号的发卡行前缀 (Visa / MasterCard 风格)。
const CARD_PREFIXES: &[&str] = &["4", "51", "52", "53", "54", "55"];

/// 随机填充用的常用英文单词。
const WORDS: &[&str] = &[
    "account", "balance", "backup", "branch", "budget", "client", "contract", "credential",
    "deposit", "dividend", "expense", "forecast", "invoice", "ledger", "liability", "margin",
    "payroll", "pension", "portfolio", "quarterly", "receipt", "refund", "revenue", "salary",
    "statement", "transfer", "treasury", "vendor", "voucher", "withdrawal",
];

/// 生成恰好 `size` 字节的伪造敏感记录流。
///
/// 每条记录依次包含用户名、密码、信用卡号、随机金额和一个随机单词，
/// 每个字段后面跟一个逗号分隔符；记录不断追加，直到超过 `size` 字节，
/// 再整体截断到恰好 `size` 字节 (最后一个字段可能被截断)。
pub fn fake_records(size: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    let mut data = Vec::with_capacity(size + 64);

    while data.len() < size {
        push_field(&mut data, &username(&mut rng));
        push_field(&mut data, &password(&mut rng));
        push_field(&mut data, &card_number(&mut rng));
        push_field(&mut data, &rng.random_range(1_000..=100_000u32).to_string());
        push_field(&mut data, WORDS[rng.random_range(0..WORDS.len())]);
    }

    data.truncate(size);
    data
}

/// 向记录流追加一个字段和它的分隔逗号。
fn push_field(data: &mut Vec<u8>, field: &str) {
    data.extend_from_slice(field.as_bytes());
    data.push(b',');
}

/// 生成形如 `first.last07` 的伪造用户名。
fn username(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    format!("{first}.{last}{:02}", rng.random_range(0..100))
}

/// 生成 10-16 位的随机字母数字密码。
fn password(rng: &mut impl Rng) -> String {
    let len = rng.random_range(10..=16);
    Alphanumeric.sample_string(rng, len)
}

/// 生成一个带 Luhn 校验位的 16 位伪造信用卡号。
fn card_number(rng: &mut impl Rng) -> String {
    let mut digits = String::from(CARD_PREFIXES[rng.random_range(0..CARD_PREFIXES.len())]);
    while digits.len() < 15 {
        digits.push(char::from(b'0' + rng.random_range(0..10u8)));
    }
    let check = luhn_check_digit(digits.as_bytes());
    digits.push(char::from(b'0' + check));
    digits
}

/// 计算 ASCII 数字串的 Luhn 校验位 (卡号的最后一位)。
fn luhn_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            let digit = u32::from(digit - b'0');
            if i % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}
