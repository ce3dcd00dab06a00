//! Blog page: featured post, search and category filter, the Malaysian
//! universities grid, the post grid, and the empty state.
//!
//! Filtering happens in `common::catalog::blog::filter_posts`; this
//! component only holds the term and category and re-renders on change.

use common::catalog::blog::{filter_posts, BlogPost, CATEGORIES, POSTS};
use common::catalog::university::UNIVERSITIES;
use common::leads::template::long_date;
use num_format::{Locale, ToFormattedString};
use yew::prelude::*;

use crate::components::article_modal::ArticleModal;
use crate::components::form_controls::select_input;
use crate::components::scholarship_modal::ScholarshipModal;
use crate::components::university_modal::UniversityModal;

const SCHOLARSHIP_POST_TITLE: &str = "Top 10 Scholarships for International Students 2024";

pub struct BlogPage {
    search_term: String,
    category: String,
}

pub enum Msg {
    SetSearchTerm(String),
    SetCategory(String),
    ClearFilters,
}

impl Component for BlogPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            search_term: String::new(),
            category: "all".to_string(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetSearchTerm(term) => self.search_term = term,
            Msg::SetCategory(category) => self.category = category,
            Msg::ClearFilters => {
                self.search_term.clear();
                self.category = "all".to_string();
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let filtered = filter_posts(&self.search_term, &self.category);
        let featured = &POSTS[0];
        // The select's placeholder entry carries the empty value; show it as
        // selected whenever the category filter is back at "all".
        let category_value = if self.category == "all" { "" } else { self.category.as_str() };

        html! {
            <div class="page">
                <section class="hero hero-small">
                    <h1>{ "Study Abroad Blog" }</h1>
                    <p>
                        { "Latest insights, tips, and guides to help you navigate your study \
                           abroad journey successfully." }
                    </p>
                </section>

                <section class="section">
                    <div class="card featured-card">
                        <div class="featured-emoji">{ featured.image }</div>
                        <div class="featured-body">
                            <span class="badge badge-primary">{ featured.category }</span>
                            <h2>{ featured.title }</h2>
                            <p class="muted">{ featured.excerpt }</p>
                            <p class="muted article-meta">
                                { format!(
                                    "👤 {} · 📅 {} · 👁 {} views",
                                    featured.author,
                                    long_date(featured.publish_date),
                                    featured.views.to_formatted_string(&Locale::en)
                                ) }
                            </p>
                            <ArticleModal post={featured} trigger_text="Read Full Article →" />
                        </div>
                    </div>
                </section>

                <section class="section filter-bar card">
                    <div class="form-field search-field">
                        <label>{ "Search" }</label>
                        <input
                            type="search"
                            placeholder="Search articles, topics, tags..."
                            value={self.search_term.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::SetSearchTerm(input.value())
                            })}
                        />
                    </div>
                    { select_input("Category", "All Categories", &CATEGORIES[1..], category_value, link.callback(|c: String| {
                        if c.is_empty() { Msg::SetCategory("all".to_string()) } else { Msg::SetCategory(c) }
                    })) }
                </section>

                <p class="muted results-count">
                    { format!("Showing {} of {} articles", filtered.len(), POSTS.len()) }
                </p>

                <section class="section">
                    <h2 class="section-title">{ "Best Universities in Malaysia" }</h2>
                    <div class="university-grid">
                        {
                            UNIVERSITIES.iter().map(|university| html! {
                                <div class="card university-card">
                                    <div class="card-top-row">
                                        <span class="badge badge-outline">{ university.kind }</span>
                                        <span class="card-emoji">{ university.logo }</span>
                                    </div>
                                    <h3>{ university.name }</h3>
                                    <p class="muted">{ university.location }</p>
                                    <dl class="fact-rows">
                                        { fact_row("Global Ranking:", university.ranking) }
                                        { fact_row("Students:", university.students) }
                                        { fact_row("Tuition:", university.tuition_fee) }
                                        { fact_row("Programs:", university.programs) }
                                    </dl>
                                    <UniversityModal university={university} />
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section class="section">
                    <div class="post-grid">
                        {
                            filtered.iter()
                                .copied()
                                .filter(|post| post.id != featured.id)
                                .map(post_card)
                                .collect::<Html>()
                        }
                    </div>

                    {
                        if filtered.is_empty() {
                            html! {
                                <div class="empty-state">
                                    <p>{ "No articles found matching your criteria." }</p>
                                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::ClearFilters)}>
                                        { "Clear Filters" }
                                    </button>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </section>

                <section class="section">
                    <div class="card newsletter-card">
                        <h3>{ "Stay Updated" }</h3>
                        <p class="muted">
                            { "Subscribe to our newsletter and get the latest study abroad tips, \
                               university updates, and scholarship opportunities delivered to your inbox." }
                        </p>
                        <div class="newsletter-row">
                            <input type="email" placeholder="Enter your email" />
                            <button class="btn btn-primary">{ "Subscribe" }</button>
                        </div>
                    </div>
                </section>
            </div>
        }
    }
}

fn post_card(post: &'static BlogPost) -> Html {
    html! {
        <div class="card post-card">
            <div class="card-top-row">
                <span class="badge badge-outline">{ post.category }</span>
                <span class="card-emoji">{ post.image }</span>
            </div>
            <h3>{ post.title }</h3>
            <p class="muted">{ post.excerpt }</p>
            <div class="tag-row">
                { for post.tags.iter().take(3).map(|tag| html! { <span class="badge badge-secondary">{ *tag }</span> }) }
            </div>
            <p class="muted article-meta">
                { format!(
                    "📅 {} · 🕑 {} · 👁 {} views",
                    long_date(post.publish_date),
                    post.read_time,
                    post.views.to_formatted_string(&Locale::en)
                ) }
            </p>
            {
                if post.title == SCHOLARSHIP_POST_TITLE {
                    html! { <ScholarshipModal /> }
                } else {
                    html! { <ArticleModal post={post} /> }
                }
            }
        </div>
    }
}

fn fact_row(label: &str, value: &str) -> Html {
    html! {
        <div class="fact-row">
            <dt class="muted">{ label }</dt>
            <dd>{ value }</dd>
        </div>
    }
}
