//! The built-in event list.
//!
//! One entry per fashion-marketing item: a stable id, the brand label shown
//! in progress output, and the article URL to screenshot. The list is fixed
//! at compile time; ids are assigned externally and never reused.

use crate::Event;

/// The full production list, in processing order.
pub fn builtin_events() -> Vec<Event> {
    vec![
        Event::new(1, "Burberry", "https://wwd.com/fashion-news/fashion-features/burberry-jennifer-saunders-naomi-campbell-christmas-ad-film-1238334044/"),
        Event::new(2, "Gap x Sandy Liang", "https://wwd.com/business-news/retail/gap-sandy-liang-collaboration-reimagining-gap-icons-downtown-edge-1238271666/"),
        Event::new(3, "Zara", "https://www.hollywoodreporter.com/lifestyle/shopping/zara-50th-anniversary-collection-campaign-how-to-shop-1236211829/"),
        Event::new(4, "Nike", "https://wwd.com/footwear-news/shoe-industry-news/nike-running-nordstrom-nyc-pop-up-1238031364/"),
        Event::new(5, "New Balance", "https://wwd.com/footwear-news/shoe-industry-news/gallery/new-balance-nordstrom-nyc-pop-up-photos-1237799692/"),
        Event::new(6, "Nike Air Max", "https://www.bizbash.com/experiential-marketing/see-inside-nike-s-shoe-inspired-pop-ups"),
        Event::new(7, "Prada", "https://schonmagazine.com/prada-holiday-2025-campaign-a-winters-tale/"),
        Event::new(8, "Tory Burch", "https://schonmagazine.com/tory-burch-the-holiday-2025-campaign/"),
        Event::new(9, "Coach", "https://www.thezoereport.com/fashion/holiday-fashion-pop-ups-nyc"),
        Event::new(10, "Adidas CLOT", "https://news.adidas.com/global/the-first-adidas-clot-pop-up-store-in-london-is-offering-an-exclusive-experience-during-wimbledon-fr/s/7c341a9d-a11c-4bd2-8994-7d5c243c17f6"),
        Event::new(11, "Adidas x Qias Omar", "https://officemagazine.net/adidas-superstar-gets-vintage-la-remix"),
        Event::new(12, "Marc Jacobs", "https://nycplugged.com/nyfw-september-2025-pop-ups-parties-shows-and-more/"),
        Event::new(13, "Nana Jacqueline", "https://us.fashionnetwork.com/news/Nana-jacqueline-opens-first-nyc-pop-up-in-soho,1678253.html"),
        Event::new(14, "A.P.C. x Marc Jacobs", "https://www.thezoereport.com/fashion/october-2025-fashion-news"),
        Event::new(15, "Gymshark", "https://www.thezoereport.com/fashion/holiday-fashion-pop-ups-nyc"),
        Event::new(16, "Pleasing (Harry Styles)", "https://www.thezoereport.com/fashion/holiday-fashion-pop-ups-nyc"),
        Event::new(17, "Loewe", "https://tryon.kivisense.com/blog/brand-activation/"),
        Event::new(18, "Tommy Hilfiger x JISOO", "https://schonmagazine.com/tory-burch-the-holiday-2025-campaign/"),
        Event::new(19, "Jimmy Choo", "https://schonmagazine.com/tory-burch-the-holiday-2025-campaign/"),
        Event::new(20, "Tiffany & Co.", "https://www.wmagazine.com/fashion/best-holiday-2025-campaigns"),
        Event::new(21, "Bergdorf Goodman", "https://www.wmagazine.com/fashion/best-holiday-2025-campaigns"),
        Event::new(22, "Tyler, the Creator x Converse", "https://wwd.com/footwear-news/sneaker-news/sneaker-release-date-calendar-june-2025-1237875104/"),
        Event::new(23, "Loro Piana", "https://sia-news.com/all-of-the-2025-holiday-campaigns-shaping-the-season/"),
        Event::new(24, "Zara 50th", "https://www.wallpaper.com/design-interiors/zara-50-anniversary-collection"),
        Event::new(25, "Bella Hadid - Ôrəbella", "https://fashionista.com/2025/09/new-york-fashion-week-nyfw-free-events-open-to-public-september-2025"),
        Event::new(26, "Brandon Maxwell x Walmart", "https://fashionista.com/2025/09/new-york-fashion-week-nyfw-free-events-open-to-public-september-2025"),
        Event::new(27, "Jenni Kayne", "https://fashionista.com/2025/09/new-york-fashion-week-nyfw-free-events-open-to-public-september-2025"),
        Event::new(28, "Tecovas", "https://nycplugged.com/nyfw-september-2025-pop-ups-parties-shows-and-more/"),
        Event::new(29, "Ksubi x Alice Hollywood", "https://fashionista.com/2025/09/new-york-fashion-week-nyfw-free-events-open-to-public-september-2025"),
        Event::new(30, "Louis Vuitton", "https://www.averagesocialite.com/fashion-beauty"),
        Event::new(31, "Minnie Rose x Zibby Media", "https://www.averagesocialite.com/fashion-beauty"),
        Event::new(32, "Gucci", "https://thefashionography.com/fashion/fashion-campaigns/"),
        Event::new(33, "Bottega Veneta x Jacob Elordi", "https://thefashionography.com/fashion/fashion-campaigns/"),
        Event::new(34, "JW Anderson", "https://thefashionography.com/fashion/fashion-campaigns/"),
        Event::new(35, "Fendi x Yuna Shin", "https://thefashionography.com/fashion/fashion-campaigns/"),
        Event::new(36, "Salomon x JJJJound", "https://hypebeast.com/2025/7/best-sneaker-releases-july-2025-week-5-nike-new-balance"),
        Event::new(37, "Krispy Kreme x Crocs", "https://hypebeast.com/2025/7/best-sneaker-releases-july-2025-week-5-nike-new-balance"),
        Event::new(38, "Cav Empt x Nike", "https://hypebeast.com/2025/7/best-sneaker-releases-july-2025-week-5-nike-new-balance"),
        Event::new(39, "Nike x Bronx Girls Skate", "https://hypebeast.com/2025/7/best-sneaker-releases-july-2025-week-5-nike-new-balance"),
        Event::new(40, "Abercrombie & Fitch", "https://digiday.com/marketing/in-earnings-reports-fashion-brands-clock-fallout-from-tariffs-and-tease-holiday-plans/"),
        Event::new(41, "Anthropologie x Camila Mendes", "https://digiday.com/marketing/in-earnings-reports-fashion-brands-clock-fallout-from-tariffs-and-tease-holiday-plans/"),
        Event::new(42, "Gap x Katseye", "https://digiday.com/marketing/in-earnings-reports-fashion-brands-clock-fallout-from-tariffs-and-tease-holiday-plans/"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let events = builtin_events();
        assert_eq!(events.len(), 42);

        let ids: Vec<u32> = events.iter().map(|e| e.id).collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), events.len());

        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_urls_are_absolute_http() {
        for event in builtin_events() {
            let parsed = url::Url::parse(&event.url)
                .unwrap_or_else(|e| panic!("event {}: {}", event.id, e));
            assert!(
                matches!(parsed.scheme(), "http" | "https"),
                "event {} has scheme {}",
                event.id,
                parsed.scheme()
            );
        }
    }
}
