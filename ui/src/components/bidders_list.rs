use payloads::responses::Bidder;
use yew::prelude::*;

use crate::utils::ranking::RankedBidder;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub standings: Vec<RankedBidder>,
}

/// Usernames aren't unique, so rows are keyed by user id when there is one.
fn row_key(bidder: &Bidder, index: usize) -> String {
    bidder
        .user_id
        .clone()
        .unwrap_or_else(|| format!("row-{index}"))
}

#[function_component]
pub fn BiddersList(props: &Props) -> Html {
    if props.standings.is_empty() {
        return html! {
            <p class="text-center text-gray-500 py-4">
                {"No bids for this auction"}
            </p>
        };
    }

    html! {
        <>
            {for props.standings.iter().enumerate().map(|(index, entry)| {
                let bidder = &entry.bidder;
                html! {
                    <div
                        key={row_key(bidder, index)}
                        class="py-2 flex items-center justify-between"
                    >
                        <div class="flex items-center gap-4">
                            {if let Some(image) = &bidder.profile_image {
                                html! {
                                    <img
                                        src={image.clone()}
                                        alt={bidder.username.clone()}
                                        class="w-12 h-12 rounded-full my-2 hidden md:block"
                                    />
                                }
                            } else {
                                html! {}
                            }}
                            <p class="text-[18px] font-semibold">
                                {&bidder.username}
                            </p>
                        </div>
                        <p class={classes!(
                            "text-[20px]",
                            "font-semibold",
                            entry.rank.text_class()
                        )}>
                            {entry.rank.label()}
                        </p>
                    </div>
                }
            })}
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::bidder;

    #[test]
    fn rows_with_the_same_username_get_distinct_keys() {
        let first = Bidder {
            user_id: Some("u-1".to_string()),
            ..bidder("sam")
        };
        let second = Bidder {
            user_id: Some("u-2".to_string()),
            ..bidder("sam")
        };

        assert_eq!(row_key(&first, 0), "u-1");
        assert_ne!(row_key(&first, 0), row_key(&second, 1));
    }

    #[test]
    fn rows_without_user_id_fall_back_to_position() {
        assert_eq!(row_key(&bidder("sam"), 3), "row-3");
        assert_ne!(row_key(&bidder("sam"), 0), row_key(&bidder("sam"), 1));
    }
}
