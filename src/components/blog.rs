//! Featured article plus a filterable list of posts.

use leptos::prelude::*;
use leptos_icons::Icon;

use folio_core::{BlogPost, CarouselFilter};

use crate::app::SiteContext;
use crate::components::icons as ic;
use crate::components::{CarouselNav, FilterBar, Reveal, stagger};
use crate::utils::format::capitalize;

stylance::import_crate_style!(css, "src/components/blog.module.css");
stylance::import_crate_style!(section_css, "src/components/sections.module.css");

#[component]
pub fn Blog() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext must be provided");
    let (featured, posts) = ctx
        .content
        .with_value(|c| (c.featured_post().cloned(), c.recent_posts()));
    let carousel = RwSignal::new(CarouselFilter::from_items(posts));

    // Navigation leaves the subset as is, so the cards (and their entrance
    // animations) are only rebuilt when the filter changes what is shown.
    let visible = Memo::new(move |_| carousel.with(visible_posts));

    let list = move || {
        visible
            .get()
            .into_iter()
            .enumerate()
            .map(|(i, post)| {
                let active =
                    Signal::derive(move || carousel.with(|c| c.current_index() == Some(i)));
                view! {
                    <Reveal delay_ms=stagger(i)>
                        <PostCard
                            post=post
                            active=active
                            on_select=Callback::new(move |_: ()| {
                                carousel.update(|c| {
                                    let _ = c.select_index(i);
                                });
                            })
                        />
                    </Reveal>
                }
            })
            .collect_view()
    };

    view! {
        <section id="blog" class=section_css::section>
            <div class=section_css::container>
                <Reveal class=section_css::header>
                    <h2 class=section_css::title>"Latest Insights"</h2>
                    <p class=section_css::subtitle>
                        "Notes on building products, leading teams, and trading the markets."
                    </p>
                </Reveal>

                {featured.map(|post| view! {
                    <Reveal>
                        <FeaturedPost post=post />
                    </Reveal>
                })}

                <FilterBar carousel=carousel />
                <div class=css::grid>{list}</div>
                <Show when=move || carousel.with(|c| c.is_empty())>
                    <p class=section_css::empty>"No posts in this category yet."</p>
                </Show>
                <CarouselNav carousel=carousel item_name="post" />
            </div>
        </section>
    }
}

#[component]
fn FeaturedPost(post: BlogPost) -> impl IntoView {
    view! {
        <article class=format!("{} {}", section_css::card, css::featured)>
            <span class=css::badge>"Featured"</span>
            <PostMeta category=post.category.clone() date=post.date.clone() read_time=post.read_time.clone() />
            <h3 class=css::featuredTitle>{post.title}</h3>
            <p class=css::excerpt>{post.excerpt}</p>
            {post.url.map(|url| view! {
                <a class=css::readMore href=url target="_blank" rel="noopener noreferrer">
                    "Read Article"
                    <Icon icon=ic::ARROW_RIGHT />
                </a>
            })}
        </article>
    }
}

#[component]
fn PostCard(
    post: BlogPost,
    active: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    let class = move || {
        if active.get() {
            format!("{} {} {}", section_css::card, css::post, css::postActive)
        } else {
            format!("{} {}", section_css::card, css::post)
        }
    };

    view! {
        <article class=class on:click=move |_| on_select.run(())>
            <PostMeta category=post.category.clone() date=post.date.clone() read_time=post.read_time.clone() />
            <h3 class=css::postTitle>{post.title}</h3>
            <p class=css::excerpt>{post.excerpt}</p>
        </article>
    }
}

#[component]
fn PostMeta(category: String, date: String, read_time: String) -> impl IntoView {
    view! {
        <div class=css::meta>
            <span class=section_css::tag>{capitalize(&category)}</span>
            <span class=css::metaItem>
                <Icon icon=ic::CALENDAR />
                {date}
            </span>
            <span class=css::metaItem>
                <Icon icon=ic::CLOCK />
                {read_time}
            </span>
        </div>
    }
}

/// Posts in the active filter, independent of the current index.
fn visible_posts(carousel: &CarouselFilter<BlogPost>) -> Vec<BlogPost> {
    carousel.visible_items().into_iter().cloned().collect()
}
