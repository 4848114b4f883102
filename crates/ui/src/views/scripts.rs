pub(super) fn scroll_to_section_script(anchor_id: &str) -> String {
    format!(
        r#"(function() {{
                const target = document.getElementById({anchor_id:?});
                if (target) {{
                    target.scrollIntoView({{ behavior: "smooth", block: "start" }});
                }}
            }})();"#,
    )
}
