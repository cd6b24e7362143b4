use yew::prelude::*;
use mandap_query::SearchParams;
use super::SearchBar;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    /// Criteria decoded from the listing URL
    pub params: SearchParams,
    pub on_search: Callback<SearchParams>,
}

/// Vendor listing page
///
/// Renders the search bar and the criteria carried by the URL; fetching and
/// rendering the matching vendors is handled elsewhere.
#[function_component(VendorsPage)]
pub fn vendors_page(props: &Props) -> Html {
    let Props { params, on_search } = props.clone();

    let criteria: Vec<(&'static str, String)> = [
        ("Search", params.query),
        ("City", params.city),
        ("Date", params.date),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .collect();

    html! {
        <div id="vendors">
            <SearchBar {on_search} />
            <div id="vendor-criteria">
                if criteria.is_empty() {
                    <p>{ "Browsing all vendors" }</p>
                } else {
                    <ul>
                        { for criteria.into_iter().map(|(label, value)| html! {
                            <li key={label}><b>{ label }</b>{ ": " }{ value }</li>
                        }) }
                    </ul>
                }
            </div>
        </div>
    }
}
