use maud::{html, Markup, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
header { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px #0002; }
main { display: flex; gap: 2rem; padding: 1.5rem; }
aside { min-width: 260px; }
aside label { display: block; margin-top: 1rem; font-weight: 600; }
aside input, aside select { width: 100%; margin-top: 0.25rem; }
table { border-collapse: collapse; }
th, td { border: 1px solid #ddd; padding: 0.35rem 0.6rem; text-align: left; }
.notice { padding: 0.75rem 1rem; border-radius: 6px; margin-bottom: 1rem; }
.notice-info { background: #eef4ff; }
.notice-warning { background: #fff6d6; }
.notice-error { background: #fde8e8; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(STYLE)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { (title) }
                }
                (content)
            }
        }
    }
}
