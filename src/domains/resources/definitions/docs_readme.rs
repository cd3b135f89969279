//! Usage guide resource.

use super::ResourceDefinition;

/// Server usage guide (static Markdown).
pub struct DocsReadmeResource;

impl ResourceDefinition for DocsReadmeResource {
    const URI: &'static str = "docs://hello/readme";
    const NAME: &'static str = "readme";
    const DESCRIPTION: &'static str = "Usage guide for the tools this server provides";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> String {
        get_readme().to_string()
    }
}

/// The usage guide text.
pub fn get_readme() -> &'static str {
    README
}

const README: &str = "# Hello MCP Server 사용 가이드

이 서버는 아래 기능을 제공합니다:

## 1) say_hello
한 사람에게 인사합니다.

## 2) say_hello_multiple
여러 사람에게 한 번에 인사합니다.

## 3) get_tour_weather_forecast
공공데이터포털 관광코스별 동네예보 API를 호출합니다.
";
