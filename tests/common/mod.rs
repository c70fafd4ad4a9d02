// tests/common/mod.rs
//
// A small offline copy of the FIRST site: index, one regional, one championship.

#![allow(dead_code)]

use std::path::Path;

use frc_scrape::config::AppOptions;
use frc_scrape::core::FixtureFetcher;

pub const REGIONAL_URL: &str = "https://my.usfirst.org/myarea/index.lasso?page=event_details&eid=11010";
pub const CHAMPIONSHIP_URL: &str = "https://my.usfirst.org/myarea/index.lasso?page=event_details&eid=11050";
pub const MATCH_RESULTS_URL: &str = "http://www2.usfirst.org/2014comp/Events/EXR/matchresults.html";
pub const AWARDS_URL: &str = "http://www2.usfirst.org/2014comp/Events/EXR/awards.html";

pub const INDEX: &str = r#"
<html><body>
  <table>
    <tr><td><a href="?page=event_details&eid=11010">2014 Example Regional</a></td></tr>
    <tr><td><a href="?page=event_details&eid=11050">2014 Championship</a></td></tr>
    <tr><td><a href="?page=team_list">Teams</a></td></tr>
  </table>
</body></html>
"#;

pub const EVENT_PAGE: &str = r#"
<html><body>
  <table>
    <tr><td>Event</td>
        <td>2014 Example Regional</td></tr>
    <tr><td>Links</td>
        <td><a href="http://www2.usfirst.org/2014comp/Events/EXR/matchresults.html">Match Results</a>
            <a href="http://www2.usfirst.org/2014comp/Events/EXR/awards.html">Awards</a></td></tr>
  </table>
</body></html>
"#;

/// 3 header rows + 2 qualification rows of 9 cells; 3 header rows + 1 elimination row.
pub const MATCH_RESULTS: &str = r#"
<html><body>
  <table><tr><td>logo</td></tr></table>
  <table><tr><td>menu</td></tr></table>
  <table>
    <tr><td>Qualification Schedule</td></tr>
    <tr><td>Red</td><td>Blue</td></tr>
    <tr><th>Time</th><th>Match</th></tr>
    <tr><td>9:00 AM</td><td>1</td><td>111</td><td>222</td><td>333</td><td>444</td><td>555</td><td>666</td><td>20</td></tr>
    <tr><td>9:07 AM</td><td>2</td><td>777</td><td>888</td><td>999</td><td>101</td><td>202</td><td>303</td><td>35</td></tr>
  </table>
  <table>
    <tr><td>Elimination Schedule</td></tr>
    <tr><td>Red</td><td>Blue</td></tr>
    <tr><th>Time</th><th>Description</th></tr>
    <tr><td>1:00 PM</td><td>Qtr 1-1</td><td>1</td><td>111</td><td>222</td><td>333</td><td>444</td><td>555</td><td>666</td><td>80</td><td>60</td></tr>
  </table>
</body></html>
"#;

pub const AWARDS: &str = "<html><body><table><tr><td>Chairman's Award</td></tr></table></body></html>";

pub fn site() -> FixtureFetcher {
    let opts = AppOptions::default();
    FixtureFetcher::new()
        .with_page(&opts.site.event_list_url, INDEX)
        .with_page(REGIONAL_URL, EVENT_PAGE)
        .with_page(MATCH_RESULTS_URL, MATCH_RESULTS)
        .with_page(AWARDS_URL, AWARDS)
}

pub fn options_writing_to(path: &Path) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.export.out_path = path.to_path_buf();
    opts
}
