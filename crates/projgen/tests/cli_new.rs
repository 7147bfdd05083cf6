mod common;

use anyhow::Result;
use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn new_without_name_creates_next_numbered_project() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    std::fs::create_dir(env.path().join("Project1"))?;
    std::fs::create_dir(env.path().join("Project3"))?;
    std::fs::write(env.path().join("notes.txt"), "")?;

    env
      .projgen()?
      .arg("new")
      .assert()
      .success()
      .stdout(predicates::str::contains("目录Project4已生成").from_utf8())
      .stdout(predicates::str::contains("文件index.html已生成").from_utf8())
      .stdout(predicates::str::contains("目录img不生成初始文件").from_utf8())
      .stdout(predicates::str::contains("项目生成完毕").from_utf8());

    assert_eq!(env.entries("Project4")?, vec!["css", "img", "index.html", "js"]);
    assert_eq!(env.entries("Project4/css")?, vec!["style.css"]);
    assert_eq!(env.entries("Project4/js")?, vec!["main.js"]);
    assert!(env.entries("Project4/img")?.is_empty());
    Ok(())
  })
}

#[test]
fn new_in_empty_parent_starts_at_project1() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    env.projgen()?.arg("new").assert().success();
    assert!(env.path().join("Project1").join("index.html").is_file());
    Ok(())
  })
}

#[test]
fn new_with_explicit_name_and_parent() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    let parent = env.path().join("sites");
    std::fs::create_dir(&parent)?;

    env
      .projgen()?
      .arg("new")
      .arg("blog")
      .arg("--path")
      .arg(&parent)
      .assert()
      .success();

    let root = parent.join("blog");
    let html = std::fs::read_to_string(root.join("index.html"))?;
    assert!(html.starts_with("<!DOCTYPE html>"), "{html}");
    assert!(html.contains(r#"<link rel="stylesheet" href="css/style.css" type="text/css">"#));
    assert_eq!(std::fs::read_to_string(root.join("css").join("style.css"))?, "");
    assert_eq!(
      std::fs::read_to_string(root.join("js").join("main.js"))?,
      "(function(){\n    \n})();"
    );
    Ok(())
  })
}

#[test]
fn new_resolves_relative_parent_against_cwd() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    std::fs::create_dir(env.path().join("sites"))?;
    env
      .projgen()?
      .args(["new", "blog", "--path", "sites"])
      .assert()
      .success();
    assert!(env.path().join("sites").join("blog").join("img").is_dir());
    Ok(())
  })
}

#[test]
fn new_no_files_creates_only_directories() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    env
      .projgen()?
      .args(["new", "bare", "--no-files"])
      .assert()
      .success()
      .stdout(predicates::str::contains("目录img不生成初始文件").not().from_utf8());

    assert_eq!(env.entries("bare")?, vec!["css", "img", "index.html", "js"]);
    assert!(env.entries("bare/css")?.is_empty());
    assert!(env.entries("bare/js")?.is_empty());
    Ok(())
  })
}

#[test]
fn new_uses_custom_starter_names() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    env
      .projgen()?
      .args(["new", "site", "--css-name", "theme", "--js-name", "app.bundle"])
      .assert()
      .success()
      .stdout(predicates::str::contains("文件theme.css已生成").from_utf8())
      .stdout(predicates::str::contains("文件app.bundle.js已生成").from_utf8());

    assert_eq!(env.entries("site/css")?, vec!["theme.css"]);
    assert_eq!(env.entries("site/js")?, vec!["app.bundle.js"]);
    Ok(())
  })
}

#[test]
fn new_fails_on_existing_directory_and_leaves_it_untouched() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    let existing = env.path().join("site");
    std::fs::create_dir(&existing)?;
    std::fs::write(existing.join("keep.txt"), "mine")?;

    env
      .projgen()?
      .args(["new", "site"])
      .assert()
      .failure()
      .stderr(predicates::str::contains("路径已存在").from_utf8())
      .stderr(predicates::str::contains("项目路径不存在").from_utf8())
      .stderr(predicates::str::contains("项目生成失败").from_utf8());

    assert_eq!(env.entries("site")?, vec!["keep.txt"]);
    Ok(())
  })
}

#[test]
fn new_rerun_fails_the_second_time() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    env.projgen()?.args(["new", "site"]).assert().success();
    env.projgen()?.args(["new", "site"]).assert().failure();
    assert_eq!(env.entries("site/css")?, vec!["style.css"]);
    Ok(())
  })
}

#[test]
fn new_rejects_reserved_characters_in_name() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    env
      .projgen()?
      .args(["new", "bad:name"])
      .assert()
      .failure()
      .stderr(predicates::str::contains("路径格式错误").from_utf8());
    assert!(env.entries(".")?.is_empty());
    Ok(())
  })
}

#[test]
fn new_reports_missing_parent() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    env
      .projgen()?
      .args(["new", "site", "--path", "absent"])
      .assert()
      .failure()
      .stderr(predicates::str::contains("路径不存在").from_utf8());
    assert!(!env.path().join("absent").exists());
    Ok(())
  })
}

#[test]
fn new_with_invalid_starter_name_still_runs_remaining_steps() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    env
      .projgen()?
      .args(["new", "site", "--css-name", "a|b"])
      .assert()
      .failure()
      .stderr(predicates::str::contains("文件名格式错误").from_utf8());

    assert!(env.entries("site/css")?.is_empty());
    assert_eq!(env.entries("site/js")?, vec!["main.js"]);
    assert!(env.path().join("site").join("img").is_dir());
    Ok(())
  })
}

#[test]
fn new_honors_project_config() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    env.write_project_config("[generate]\ncss_name = \"base\"\njs_name = \"index\"\n")?;
    env.projgen()?.args(["new", "site"]).assert().success();
    assert_eq!(env.entries("site/css")?, vec!["base.css"]);
    assert_eq!(env.entries("site/js")?, vec!["index.js"]);
    Ok(())
  })
}

#[cfg(unix)]
#[test]
fn new_with_open_launches_editor_on_project_root() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    let (editor, marker) = env.fake_editor()?;
    env
      .projgen()?
      .args(["new", "site", "--open", "--editor-name", "Fake"])
      .arg("--editor-path")
      .arg(&editor)
      .assert()
      .success()
      .stdout(predicates::str::contains("正在打开编辑器Fake").from_utf8());

    assert_eq!(
      std::fs::read_to_string(&marker)?,
      env.path().join("site").display().to_string()
    );
    Ok(())
  })
}

#[test]
fn new_with_open_but_no_editor_fails_before_creating_anything() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    env
      .projgen()?
      .args(["new", "site", "--open"])
      .assert()
      .failure()
      .stderr(predicates::str::contains("no editor configured").from_utf8());
    assert!(!env.path().join("site").exists());
    Ok(())
  })
}
