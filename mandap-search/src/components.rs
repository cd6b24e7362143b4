pub use searchbar::SearchBar;
pub use vendors::VendorsPage;

mod searchbar {
    use yew::prelude::*;
    use web_sys::{HtmlInputElement, InputEvent, MouseEvent};
    use wasm_bindgen::{JsCast, UnwrapThrowExt};
    use mandap_query::{Navigator, SearchParams, parse_search_query};
    use crate::{AppContext, settings};

    #[derive(Clone, PartialEq, Properties)]
    pub struct Props {
        /// Submit the bar's current criteria
        pub on_search: Callback<SearchParams>,
    }

    /// Forward an input's edits to a string state handle
    fn bind_input(handle: UseStateHandle<String>) -> Callback<InputEvent> {
        Callback::from(move |e: InputEvent| {
            let target = e.target().unwrap_throw();
            let target: HtmlInputElement = target.dyn_into().unwrap_throw();
            handle.set(target.value());
        })
    }

    #[function_component(SearchBar)]
    pub fn search_bar(props: &Props) -> Html {
        let context = use_context::<AppContext>().unwrap();

        let query = use_state(String::new);
        let city = use_state(String::new);
        let date = use_state(String::new);

        // Seed the fields from the location, once the bar is attached
        {
            let navigator = context.navigator.clone();
            let (query, city, date) = (query.clone(), city.clone(), date.clone());
            use_effect_with((), move |_| {
                let params = parse_search_query(&navigator.current_query());
                query.set(params.query);
                city.set(params.city);
                date.set(params.date);
            });
        }

        let on_submit = {
            let (query, city, date) = (query.clone(), city.clone(), date.clone());
            let on_search = props.on_search.clone();
            Callback::from(move |_: MouseEvent| {
                on_search.emit(SearchParams {
                    query: (*query).clone(),
                    city: (*city).clone(),
                    date: (*date).clone(),
                });
            })
        };

        let shortcuts = settings::POPULAR_SEARCHES.iter().copied().map(|phrase| {
            let onclick = {
                let (query, city, date) = (query.clone(), city.clone(), date.clone());
                let on_search = props.on_search.clone();
                Callback::from(move |_: MouseEvent| {
                    // The handle update lands on the next render; submit from the phrase itself
                    query.set(phrase.to_string());
                    on_search.emit(SearchParams {
                        query: phrase.to_string(),
                        city: (*city).clone(),
                        date: (*date).clone(),
                    });
                })
            };
            html! {
                <button class="popular-search" key={phrase} {onclick}>{ phrase }</button>
            }
        });

        html! {
            <div id="search-bar">
                <div class="search-fields">
                    <input type="search" placeholder="Search vendors, venues..."
                        value={(*query).clone()} oninput={bind_input(query.clone())} />
                    <input type="text" placeholder="Select City"
                        value={(*city).clone()} oninput={bind_input(city.clone())} />
                    <input type="date"
                        value={(*date).clone()} oninput={bind_input(date.clone())} />
                    <button class="search-submit" onclick={on_submit}>{ "Search" }</button>
                </div>
                <div class="popular-searches">
                    <span>{ "Popular searches:" }</span>
                    { for shortcuts }
                </div>
            </div>
        }
    }
}

mod vendors;
