use crate::domain::a001_catalog::actions::{add_to_cart, add_to_wishlist};
use crate::shared::icons::{icon, star};
use contracts::domain::a001_catalog::aggregate::{format_price, Product};
use leptos::prelude::*;

/// Карточка товара в сетке каталога
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let stars = product.star_states();
    let price = format_price(product.price);
    let discounted_price = format_price(product.discounted_price);

    let for_cart = product.clone();
    let for_wishlist = product.clone();

    view! {
        <div class="product-card">
            <div class="product-card__image">
                <img src=product.image.clone() alt=product.title.clone() />
            </div>
            <h2 class="product-card__title">{product.title.clone()}</h2>
            <p class="product-card__price">
                <span>{price}</span>
                <span class="product-card__price--discounted">{discounted_price}</span>
            </p>
            <div class="product-card__rating">
                {stars.into_iter().map(star).collect_view()}
            </div>
            <div class="product-card__actions">
                <button class="button button--primary" on:click=move |_| add_to_cart(&for_cart)>
                    {icon("cart")}
                </button>
                <button class="button button--secondary" on:click=move |_| add_to_wishlist(&for_wishlist)>
                    {icon("heart")}
                </button>
            </div>
        </div>
    }
}
