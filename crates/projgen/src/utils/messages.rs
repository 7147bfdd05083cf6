//! User-facing status lines.
//! Centralizes the message strings so the CLI and the tests agree on them.

// Path errors
pub(crate) const PATH_MALFORMED: &str = "路径格式错误";
pub(crate) const PATH_EXISTS: &str = "路径已存在";
pub(crate) const PATH_MISSING: &str = "路径不存在";
pub(crate) const PROJECT_PATH_MISSING: &str = "项目路径不存在";
pub(crate) const FILE_NAME_MALFORMED: &str = "文件名格式错误";

// Editor
pub(crate) const EDITOR_PATH_INVALID: &str = "文件路径不正确";

// Overall result
pub(crate) const GENERATE_DONE: &str = "项目生成完毕";
pub(crate) const GENERATE_FAILED: &str = "项目生成失败";

pub(crate) fn dir_created(name: impl std::fmt::Display) -> String {
  format!("目录{name}已生成")
}

pub(crate) fn file_created(name: impl std::fmt::Display) -> String {
  format!("文件{name}已生成")
}

pub(crate) fn no_starter_file(dir: impl std::fmt::Display) -> String {
  format!("目录{dir}不生成初始文件")
}

pub(crate) fn opening_editor(name: impl std::fmt::Display) -> String {
  format!("正在打开编辑器{name}")
}

pub(crate) fn file_write_failed(name: impl std::fmt::Display) -> String {
  format!("文件{name}生成失败")
}
