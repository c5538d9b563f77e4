const DASH_SEPARATOR: &str = " - ";
const PAREN_OPEN: &str = " (";

/// 生成用于模糊匹配的 key，不用于展示
///
/// 「Lotus - 水のほとり」「Cinema24 (something)」这类标题只保留前面的主体部分
pub fn normalize_title(source: &str) -> String {
    let trimmed = source.trim();
    let cut_by_dash = trimmed
        .split_once(DASH_SEPARATOR)
        .map_or(trimmed, |(head, _)| head);
    let cut_by_paren = cut_by_dash
        .split_once(PAREN_OPEN)
        .map_or(cut_by_dash, |(head, _)| head);

    cut_by_paren.trim().to_lowercase()
}

/// 双向包含
pub fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
