use url::Url;

use crate::Error;

const SOLD_LISTINGS_SEARCH_URL: &str = "https://www.ebay.com/sch/i.html";

/// Search page listing sold and completed items for `keyword`.
pub fn search_url(keyword: &str) -> Result<Url, Error> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(Error::EmptyKeyword);
    }
    Ok(Url::parse_with_params(
        SOLD_LISTINGS_SEARCH_URL,
        &[
            ("_nkw", keyword),
            ("_sacat", "0"),
            ("_from", "R40"),
            ("rt", "nc"),
            ("LH_Complete", "1"),
            ("LH_Sold", "1"),
        ],
    )?)
}
