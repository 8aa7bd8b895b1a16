//! Sidebar component with collapsible menu groups

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::system::routing::AppRoute;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(AppRoute, &'static str)>, // (route, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Visão Geral",
            icon: "dashboard",
            items: vec![
                (AppRoute::Dashboard, "dashboard"),
                (AppRoute::Reports, "bar-chart"),
            ],
        },
        MenuGroup {
            id: "operations",
            label: "Atendimento",
            icon: "calendar",
            items: vec![
                (AppRoute::Appointments, "calendar"),
                (AppRoute::Clients, "users"),
                (AppRoute::Sales, "cart"),
                (AppRoute::ServiceOrders, "wrench"),
            ],
        },
        MenuGroup {
            id: "finance",
            label: "Financeiro",
            icon: "cash",
            items: vec![
                (AppRoute::Invoices, "invoices"),
                (AppRoute::CashRegister, "cash"),
            ],
        },
        MenuGroup {
            id: "inventory",
            label: "Estoque",
            icon: "products",
            items: vec![(AppRoute::Products, "products")],
        },
    ]
}

/// Подпись пункта меню
fn menu_label(route: &AppRoute) -> &'static str {
    match route {
        AppRoute::Sales => "Vendas",
        AppRoute::Invoices => "Boletos",
        other => other.title(),
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(
        groups.iter().map(|g| g.id.to_string()).collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_click = group_id.clone();
                let gid_exp = group_id.clone();
                let gid_show = group_id;
                let items_stored = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
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
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(route, icon_name)| {
                                    let label = menu_label(&route);
                                    let active_route = route.clone();
                                    view! {
                                        <a
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.route.get().section() == active_route
                                            style:padding-left="10px"
                                            href=route.path()
                                            on:click={
                                                let route = route.clone();
                                                move |ev: leptos::ev::MouseEvent| {
                                                    ev.prevent_default();
                                                    ctx.navigate(route.clone());
                                                }
                                            }
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </a>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_covers_every_section() {
        let routes: Vec<AppRoute> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(r, _)| r))
            .collect();
        for expected in [
            AppRoute::Dashboard,
            AppRoute::Reports,
            AppRoute::Appointments,
            AppRoute::Clients,
            AppRoute::Sales,
            AppRoute::Invoices,
            AppRoute::Products,
            AppRoute::CashRegister,
            AppRoute::ServiceOrders,
        ] {
            assert!(routes.contains(&expected), "{:?}", expected);
        }
        assert_eq!(menu_label(&AppRoute::Sales), "Vendas");
    }
}
