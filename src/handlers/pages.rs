//! Input form and result page rendering.

use actix_web::HttpResponse;
use paperclip::actix::api_v2_operation;

use crate::utils::html::escape_html_multiline;

/// Sentinel value of the destination select's placeholder option
pub const PREFECTURE_PLACEHOLDER: &str = "都道府県を選択してください";

/// Sentinel value of the day-count select's placeholder option
pub const DAY_PLACEHOLDER: &str = "予定日数を選択してください";

const INPUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <title>旅行プラン提案</title>
    <style>
        body {
            font-family: sans-serif;
            margin: 0;
            padding: 0;
            background: #f5f5f5;
            color: #333;
        }
        .container {
            max-width: 600px;
            margin: 40px auto;
            padding: 20px;
            background: #fff;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
            border-radius: 8px;
        }
        h1 {
            text-align: center;
        }
        select, input[type="submit"] {
            display: block;
            margin: 16px auto;
            padding: 8px;
            font-size: 1rem;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>旅行プラン提案</h1>
        <form action="/result" method="post">
            <select name="prefecture">
                <option>都道府県を選択してください</option>
                <option>北海道</option>
                <option>東京都</option>
                <option>神奈川県</option>
                <option>長野県</option>
                <option>石川県</option>
                <option>京都府</option>
                <option>大阪府</option>
                <option>広島県</option>
                <option>福岡県</option>
                <option>沖縄県</option>
            </select>
            <select name="day">
                <option>予定日数を選択してください</option>
                <option>1</option>
                <option>2</option>
                <option>3</option>
                <option>4</option>
                <option>5</option>
                <option>6</option>
                <option>7</option>
            </select>
            <input type="submit" value="プランを提案してもらう">
        </form>
    </div>
</body>
</html>"#;

const RESULT_HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <title>旅行プラン提案結果</title>
    <style>
        body {
            font-family: sans-serif;
            margin: 0;
            padding: 0;
            background: #f5f5f5;
            color: #333;
        }
        .container {
            max-width: 800px;
            margin: 40px auto;
            padding: 20px;
            background: #fff;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
            border-radius: 8px;
        }
        h1 {
            text-align: center;
        }
        .plan {
            background: #eee;
            padding: 20px;
            border-radius: 4px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>旅行プラン提案結果</h1>
        <div class="plan">{result}</div>
        <p><a href="/">入力画面に戻る</a></p>
    </div>
</body>
</html>"#;

/// Build the input-form response
pub fn input_form_response() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INPUT_HTML)
}

/// Build the result-page response with the given text interpolated
pub fn result_page_response(result: &str) -> HttpResponse {
    let body = RESULT_HTML_TEMPLATE.replace("{result}", &escape_html_multiline(result));
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Input page endpoint
///
/// Renders the travel-plan request form unconditionally. Also used as the
/// fallback for non-POST requests to `/result`.
#[api_v2_operation(
    summary = "Input Form Page",
    description = "Renders the travel-plan request form with destination and day-count selections.",
    tags("Pages"),
    responses(
        (status = 200, description = "Input form HTML")
    )
)]
pub async fn input_page() -> HttpResponse {
    tracing::info!("rendering input page");
    input_form_response()
}
