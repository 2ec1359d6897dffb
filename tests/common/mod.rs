#![allow(dead_code)]
use assert_fs::TempDir;
use assert_fs::prelude::*;

/// A small but realistic manuscript: headings, Japanese prose, a fenced
/// code block, and paragraph breaks.
pub const SAMPLE: &str = "\
# 第1章 はじめに\n\
\n\
この章では基本的な考え方を説明します。\n\
まずは全体像を把握しましょう。\n\
\n\
## 1.1 サンプルコード\n\
\n\
次のコードを見てください。\n\
\n\
```java\n\
public class Hello {\n\
    public static void main(String[] args) {\n\
        System.out.println(\"hello\");\n\
    }\n\
}\n\
```\n\
\n\
以上で説明を終わります。\n";

/// Write `SAMPLE` as `genko.md` into a fresh temp dir.
pub fn manuscript_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    dir.child("genko.md").write_str(SAMPLE).unwrap();
    dir
}

pub fn bin() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("manuscript-chunker").unwrap()
}
