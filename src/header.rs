use crate::comp::View;
use crate::node::Element;

// Fixed site header injected into <page-header> on every guide page.
// The embedding page owns the referenced image and link paths and the CSS
// classes.
#[derive(Default)]
pub struct PageHeader;

impl View for PageHeader {
	const TAG: &'static str = "page-header";

	fn content(&self) -> Element {
		Element::new("header").attr("id", "header").child(
			Element::new("div")
				.attr("class", "inner")
				.child(
					Element::new("a")
						.attr("href", "../../index.html")
						.attr("class", "logo")
						.child(Element::new("span").attr("class", "symbol").child(
							Element::new("img")
								.attr("src", "../../images/pinnacle_point_logo.png")
								.attr("alt", ""),
						))
						.child(
							Element::new("span")
								.attr("class", "title")
								.text("Pinnacle Points"),
						)
						.child(Element::new("br"))
						.child(
							Element::new("span")
								.attr("class", "medium-font")
								.text("Points where no higher")
								.child(Element::new("br"))
								.text("point can be seen"),
						),
				)
				.child(Element::new("nav").child(Element::new("ul").child(
					Element::new("li").child(
						Element::new("a").attr("href", "#menu").text("Menu"),
					),
				))),
		)
	}
}

#[cfg(test)]
mod test {
	use super::PageHeader;
	use crate::comp::View;

	const EXPECTED: &str = concat!(
		"<header id=\"header\">",
		"<div class=\"inner\">",
		"<a class=\"logo\" href=\"../../index.html\">",
		"<span class=\"symbol\">",
		"<img alt=\"\" src=\"../../images/pinnacle_point_logo.png\">",
		"</span>",
		"<span class=\"title\">Pinnacle Points</span>",
		"<br>",
		"<span class=\"medium-font\">",
		"Points where no higher<br>point can be seen",
		"</span>",
		"</a>",
		"<nav><ul><li><a href=\"#menu\">Menu</a></li></ul></nav>",
		"</div>",
		"</header>",
	);

	#[test]
	fn renders_expected_fragment() {
		assert_eq!(PageHeader.render_html(), EXPECTED);
	}

	#[test]
	fn render_is_deterministic() {
		assert_eq!(PageHeader.render_html(), PageHeader.render_html());
	}

	#[test]
	fn contains_exactly_one_nav_item_and_image() {
		let html = PageHeader.render_html();
		assert_eq!(html.matches("<li>").count(), 1);
		assert_eq!(html.matches("<img").count(), 1);
	}

	#[test]
	fn links_back_to_site_index() {
		assert!(PageHeader
			.render_html()
			.contains("href=\"../../index.html\""));
	}
}
