//! End-to-end properties of the reduction pipeline.

use css_reduce::{reduce, ContentKind, ContentSource, ReduceError, ReduceOptions};
use pretty_assertions::assert_eq;
use std::time::Duration;

async fn run(css: &str, markup: &str, script: &str) -> String {
    reduce(
        css,
        &[],
        true,
        vec![
            ContentSource::markup(markup),
            ContentSource::script(script),
        ],
        ReduceOptions::default(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn media_isolation() {
    let css = "@media (min-width:600px){.a{color:red}}.b{color:blue}";
    let out = run(css, "<div></div>", "").await;

    // The full media block survives verbatim; the unused .b is dropped.
    assert_eq!(out, "@media (min-width:600px){.a{color:red}}");
}

#[tokio::test]
async fn media_block_survives_even_when_inner_rules_are_unused() {
    let media = "@media screen and (max-width: 40em) {\n  .never-used { display: none }\n}";
    let css = format!("{media}\n.used{{color:red}}");
    let out = run(&css, r#"<p class="used"></p>"#, "").await;
    assert_eq!(out, format!(".used {{ color:red }}\n{media}"));
}

#[tokio::test]
async fn dynamic_state_retention_without_usage_evidence() {
    // .btn appears nowhere in markup or script, but the rule carries a
    // dynamic-state pseudo-class and must survive.
    let out = run(".btn:hover{color:red}", "<div></div>", "").await;
    assert_eq!(out, ".btn:hover { color:red }");
}

#[tokio::test]
async fn all_recognized_fragments_are_retained() {
    let cases = [
        ".a::after{content:''}",
        ".a::before{content:''}",
        ".a:where(.b){color:red}",
        ".a:is(.b){color:red}",
        ".a:not(.b){color:red}",
        ".a:has(.b){color:red}",
        ".a:nth-child(2){color:red}",
        ".a:nth-of-type(2){color:red}",
        ".a:first-child{color:red}",
        ".a:last-child{color:red}",
        ".a:focus-within{color:red}",
        ".a:focus{color:red}",
        ".a:hover{color:red}",
    ];
    for css in cases {
        let out = run(css, "<div></div>", "").await;
        assert!(!out.is_empty(), "rule dropped for input: {css}");
    }
}

#[tokio::test]
async fn descendant_preserved_under_preserve_children() {
    // .icon is absent from content but sits beneath a retained
    // dynamic-state selector.
    let out = run(".btn:hover .icon{fill:red}", "<div></div>", "").await;
    assert_eq!(out, ".btn:hover .icon { fill:red }");
}

#[tokio::test]
async fn descendant_stripped_under_flat_strategy() {
    let css = ".btn{color:red}.btn .child{color:green}";
    let out = reduce(
        css,
        &["btn".to_string()],
        false,
        vec![ContentSource::markup("<div></div>")],
        ReduceOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(out, ".btn { color:red }");
}

#[tokio::test]
async fn script_tokens_count_as_usage() {
    let css = ".toast{opacity:1}.gone{opacity:0}";
    let out = run(
        css,
        "<div></div>",
        "element.classList.add('toast');",
    )
    .await;
    assert_eq!(out, ".toast { opacity:1 }");
}

#[tokio::test]
async fn duplicate_rules_from_two_sources_collapse() {
    let css = ".a{color:red}";
    let out = run(
        css,
        r#"<div class="a"></div>"#,
        "document.querySelector('.a');",
    )
    .await;
    assert_eq!(out, ".a { color:red }");
}

#[tokio::test]
async fn idempotence() {
    let css = "@media print{.p{margin:0}}\n.used{color:red}\n.unused{color:blue}\n.btn:hover{color:green}";
    let markup = r#"<div class="used"></div>"#;
    let script = "console.log('nothing');";

    let first = run(css, markup, script).await;
    let second = run(&first, markup, script).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unanalyzable_source_fails_whole_reduction() {
    let bad = ContentSource::new("scripts", ContentKind::Script, vec![0xff, 0xfe]);
    let err = reduce(
        ".a{color:red}",
        &[],
        true,
        vec![ContentSource::markup("<div></div>"), bad],
        ReduceOptions::default(),
    )
    .await
    .unwrap_err();

    match err {
        ReduceError::Analysis { label, .. } => assert_eq!(label, "scripts"),
        other => panic!("expected analysis error, got: {other}"),
    }
}

#[tokio::test]
async fn deadline_exceeded_is_a_hard_failure() {
    let options = ReduceOptions {
        timeout: Some(Duration::ZERO),
    };
    let err = reduce(
        ".a{color:red}",
        &[],
        true,
        vec![ContentSource::markup(r#"<div class="a"></div>"#)],
        options,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ReduceError::Timeout { .. }));
}

#[tokio::test]
async fn safelisted_class_survives_without_usage() {
    let out = reduce(
        ".keep-me{color:red}.drop-me{color:blue}",
        &["keep-me".to_string()],
        true,
        vec![ContentSource::markup("<div></div>")],
        ReduceOptions::default(),
    )
    .await
    .unwrap();
    assert_eq!(out, ".keep-me { color:red }");
}

#[tokio::test]
async fn important_markers_are_stripped() {
    let out = run(
        ".a{color:red !important}",
        r#"<i class="a"></i>"#,
        "",
    )
    .await;
    assert_eq!(out, ".a { color:red }");
}
