//! Fixed HTML fragments. Indentation is part of the output format.

pub const DOCTYPE: &str = "<!DOCTYPE html>\n<html>\n    <head>\n";
pub const META: &str =
    "        <meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n";
pub const HEAD_END: &str = "    </head>\n    <body>\n";
pub const HIGHLIGHTER_RUN: &str = "    <script>new Highlighter().run(document);</script>\n";
pub const BODY_END: &str = "    </body>\n</html>";

pub const BOX_OPEN: &str = "        <fieldset class='box'>\n";
pub const BOX_CLOSE: &str = "        </fieldset>\n";
pub const LIST_OPEN: &str = "                <ul>\n";
pub const LIST_CLOSE: &str = "                </ul>\n";
pub const NESTED_LIST_OPEN: &str = "                        <ul>\n";
pub const NESTED_LIST_CLOSE: &str = "                        </ul>\n";

pub const ITEM_INDENT: &str = "                    ";
pub const NESTED_ITEM_INDENT: &str = "                            ";
pub const BLOCK_INDENT: &str = "                ";
pub const LEGEND_INDENT: &str = "            ";

pub const CODE_OPEN: &str = "<pre><code>";
pub const CODE_CLOSE: &str = "</code></pre>";

pub fn title(text: &str) -> String {
    format!("        <title>{text}</title>\n")
}

pub fn stylesheet(assets_url: &str) -> String {
    format!("        <link rel=\"stylesheet\" type=\"text/css\" href=\"{assets_url}/main.css\">\n")
}

pub fn favicon(assets_url: &str) -> String {
    format!(
        "        <link rel=\"icon\" type=\"image/png\" sizes=\"32x32\" href=\"{assets_url}/favicon.png\">\n"
    )
}

pub fn highlighter_script(assets_url: &str) -> String {
    format!("        <script src=\"{assets_url}/syntaxhighlighter.js\"></script>\n")
}

pub fn legend(text: &str) -> String {
    format!("{LEGEND_INDENT}<legend>{text}</legend>\n")
}

pub fn anchor(name: &str) -> String {
    format!("{LEGEND_INDENT}<a name='{name}'></a>\n")
}

pub fn toc_entry(heading: &str) -> String {
    item(&format!("<a href='#{heading}'>{heading}</a>"))
}

pub fn item(html: &str) -> String {
    format!("{ITEM_INDENT}<li><span>{html}</span></li>\n")
}

pub fn nested_item(html: &str) -> String {
    format!("{NESTED_ITEM_INDENT}<li><span>{html}</span></li>\n")
}

pub fn paragraph(html: &str) -> String {
    format!("{BLOCK_INDENT}<p>{html}</p>\n")
}

pub fn code(lines: &[String]) -> String {
    format!("{BLOCK_INDENT}{CODE_OPEN}{}{CODE_CLOSE}\n", lines.join("\n"))
}

pub fn image(assets_url: &str, file: &str) -> String {
    format!("<a href='{assets_url}/{file}'><img class='imgbody' src='{assets_url}/{file}'></a>")
}

pub fn analytics(tracking_id: &str) -> String {
    format!(
        "    <script> (function(i,s,o,g,r,a,m){{i['GoogleAnalyticsObject']=r;i[r]=i[r]||function(){{ (i[r].q=i[r].q||[]).push(arguments)}},i[r].l=1*new Date();a=s.createElement(o), m = s.getElementsByTagName(o)[0];a.async=1;a.src=g;m.parentNode.insertBefore(a,m) }})(window,document,'script','https://www.google-analytics.com/analytics.js','ga'); ga('create', '{tracking_id}', 'auto'); ga('send', 'pageview'); </script>\n"
    )
}
