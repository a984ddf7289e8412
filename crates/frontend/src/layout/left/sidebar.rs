//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "pricing_guide",
            label: "Pricing Guide",
            icon: "package",
            items: vec![("c100_catalog", tab_label_for_key("c100_catalog"), "search")],
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "settings",
            items: vec![
                (
                    "d200_admin_dashboard",
                    tab_label_for_key("d200_admin_dashboard"),
                    "layout-dashboard",
                ),
                ("a001_sku", tab_label_for_key("a001_sku"), "list"),
                ("a002_category", tab_label_for_key("a002_category"), "tag"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Обе группы раскрыты при старте
    let expanded_groups = RwSignal::new(vec![
        "pricing_guide".to_string(),
        "administration".to_string(),
    ]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        // Parent item
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded={
                                    let gid_exp = group_id_for_exp.clone();
                                    move || expanded_groups.get().contains(&gid_exp)
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        // Child items
                        <div
                            class="app-sidebar__children"
                            class:hidden={
                                let gid = group_id.clone();
                                move || !expanded_groups.get().contains(&gid)
                            }
                        >
                            {group.items.into_iter().map(|(item_id, item_label, item_icon)| {
                                let key = item_id.to_string();
                                let key_for_active = key.clone();
                                view! {
                                    <div
                                        class="app-sidebar__item app-sidebar__item--child"
                                        class:app-sidebar__item--active=move || {
                                            ctx.active.get().as_deref() == Some(key_for_active.as_str())
                                        }
                                        on:click=move |_| ctx.open_tab(&key, item_label)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(item_icon)}
                                            <span>{item_label}</span>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
