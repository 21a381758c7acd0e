pub const SUCCESS_CODE: &str = "0";

/// Provider error codes and the message shown for each.
pub const ERROR_MESSAGES: &[(&str, &str)] = &[
    ("101", "缺少必填的参数"),
    ("102", "不支持的语言类型"),
    ("103", "翻译文本过长"),
    ("108", "应用ID无效"),
    ("110", "无相关服务的有效实例"),
    ("111", "开发者账号无效"),
    ("112", "请求服务无效"),
    ("113", "查询为空"),
    ("202", "签名检验失败,检查 KEY 和 SECRET"),
    ("401", "账户已经欠费"),
    ("411", "访问频率受限"),
];

pub fn error_message(code: &str) -> String {
    ERROR_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| message.to_string())
        .unwrap_or_else(|| format!("请参考错误码：{code}"))
}
